use crate::cli::commands::del::ask_confirmation;
use crate::cli::parser::{Commands, PartitionAction};
use crate::config::Config;
use crate::core::partition::PartitionLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::paint_partition;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Partition { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut state = queries::load_state(&mut pool)?;

        match action {
            PartitionAction::Add { name, color } => {
                let partition = PartitionLogic::add(
                    &mut pool,
                    &mut state,
                    name,
                    color.clone(),
                    date::now(),
                )?;
                success(format!(
                    "Partition #{} '{}' created",
                    partition.id, partition.name
                ));
            }

            PartitionAction::List => {
                print_partitions(&state);
            }

            PartitionAction::Rename { id, name } => {
                let partition = PartitionLogic::rename(&mut pool, &mut state, *id, name)?;
                success(format!(
                    "Partition #{} renamed to '{}'",
                    partition.id, partition.name
                ));
            }

            PartitionAction::Color { id, color } => {
                let partition = PartitionLogic::recolor(&mut pool, &mut state, *id, color)?;
                success(format!(
                    "Partition #{} '{}' recolored to {}",
                    partition.id, partition.name, partition.color
                ));
            }

            PartitionAction::Del { id, yes } => {
                if !*yes {
                    let prompt = format!(
                        "Delete partition #{}? Its events will be moved to unclassified.",
                        id
                    );
                    if !ask_confirmation(&prompt) {
                        info("Operation cancelled.");
                        return Ok(());
                    }
                }

                let (removed, reassigned) = PartitionLogic::delete(&mut pool, &mut state, *id)?;
                success(format!(
                    "Partition '{}' deleted ({} events moved to unclassified)",
                    removed.name, reassigned
                ));
            }
        }
    }

    Ok(())
}

fn print_partitions(state: &crate::models::state::State) {
    if state.partitions().is_empty() {
        println!("No partitions defined yet.");
        return;
    }

    let mut table = Table::new(&["ID", "Name", "Color", "Events", "Created"]);

    for p in state.partitions() {
        let count = state
            .events()
            .iter()
            .filter(|e| e.partition_id == Some(p.id))
            .count();

        table.add_row(vec![
            p.id.to_string(),
            paint_partition(&p.name, &p.color),
            p.color.clone(),
            count.to_string(),
            p.created.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("📁 Partitions:\n");
    print!("{}", table.render());
}

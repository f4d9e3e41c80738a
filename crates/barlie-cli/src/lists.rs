//! Handlers for the `list` subcommands.

use barlie_core::{BeerList, BeerListStore};

use crate::ListAction;

/// # Errors
///
/// Returns an error for an unknown list name or when the store cannot be saved.
pub(crate) fn run(store: &mut BeerListStore, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Show { name: Some(name) } => {
            let list = store
                .get(&name)
                .ok_or_else(|| anyhow::anyhow!("no beer list named '{name}'"))?;
            print_list(list);
        }
        ListAction::Show { name: None } => {
            for list in store.lists() {
                print_list(list);
            }
        }
        ListAction::Add { list, beer_id } => {
            if store.add(&list, &beer_id)? {
                println!("added {beer_id} to {list}");
            } else {
                println!("{beer_id} is already on {list}");
            }
        }
        ListAction::Remove { list, beer_id } => {
            if store.remove(&list, &beer_id)? {
                println!("removed {beer_id} from {list}");
            } else {
                println!("{beer_id} is not on {list}");
            }
        }
        ListAction::Move { beer_id, from, to } => {
            if store.move_beer(&beer_id, &from, &to)? {
                println!("moved {beer_id} from {from} to {to}");
            } else {
                println!("{beer_id} is not on {from}");
            }
        }
    }
    Ok(())
}

fn print_list(list: &BeerList) {
    println!("{} ({})", list.name, list.len());
    for beer_id in &list.beer_ids {
        println!("  {beer_id}");
    }
}

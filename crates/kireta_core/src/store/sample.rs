//! Debug seed data for development builds and demos.

use crate::model::check_list::CheckList;
use crate::model::date::DateString;
use crate::model::item::Item;
use crate::store::command::{handle, Command};
use crate::store::Store;
use chrono::NaiveDate;
use log::error;

const SAMPLE_ITEM_NAMES: [&str; 2] = ["item1", "item2"];
const SAMPLE_DATES: [(i32, u32, u32); 3] = [(2023, 9, 7), (2023, 9, 8), (2023, 9, 9)];

/// Commands that build the sample catalog from an empty store.
///
/// Two items and three consecutive check-lists; the first item is checked on
/// every date, the second only on the last one. Ids are freshly generated on
/// every call.
pub fn sample_commands() -> Vec<Command> {
    let items = SAMPLE_ITEM_NAMES.map(Item::new);
    let check_lists = SAMPLE_DATES
        .iter()
        .filter_map(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| CheckList::new(DateString::from(date)))
        .collect::<Vec<_>>();

    let mut commands = items
        .iter()
        .cloned()
        .map(Command::add_item)
        .chain(check_lists.iter().cloned().map(Command::add_check_list))
        .collect::<Vec<_>>();

    let [first, second] = &items;
    commands.extend(
        check_lists
            .iter()
            .map(|check_list| Command::set_checked(check_list.id.clone(), first.id.clone(), true)),
    );
    if let Some(last) = check_lists.last() {
        commands.push(Command::set_checked(
            last.id.clone(),
            second.id.clone(),
            true,
        ));
    }
    commands
}

impl Store {
    /// Creates a store pre-populated with [`sample_commands`].
    pub fn example() -> Self {
        let mut store = Self::new();
        for command in sample_commands() {
            if let Err(err) = handle(&mut store, command) {
                error!("event=store_seed module=store status=error error={err}");
            }
        }
        store
    }
}

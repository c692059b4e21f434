//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `kireta_core` linkage without the Flutter runtime.
//! - Print a summary of the seeded sample store.

use chrono::Utc;
use kireta_core::{
    days_since_last_checked, find_all_check_lists, find_all_items,
    find_checked_item_ids_by_check_list_id, Store,
};

fn main() {
    println!("kireta_core ping={}", kireta_core::ping());
    println!("kireta_core version={}", kireta_core::core_version());

    let store = Store::example();
    let now = Utc::now();
    for check_list in find_all_check_lists(&store) {
        let checked = find_checked_item_ids_by_check_list_id(&store, &check_list.id).len();
        println!("check_list date={} checked_items={checked}", check_list.date);
    }
    for item in find_all_items(&store) {
        match days_since_last_checked(&store, &item.id, now) {
            Some(days) => println!("item name={} days_since_last_checked={days}", item.name),
            None => println!("item name={} days_since_last_checked=none", item.name),
        }
    }
}

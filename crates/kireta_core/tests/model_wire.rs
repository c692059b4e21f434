use kireta_core::{new_check_list, new_item, CheckList, Command, DateString, Item};
use std::collections::HashSet;

#[test]
fn constructors_assign_fresh_ids() {
    let items = (0..200).map(|i| new_item(format!("item {i}"))).collect::<Vec<_>>();
    let ids = items.iter().map(|item| item.id.as_str()).collect::<HashSet<_>>();
    assert_eq!(ids.len(), items.len());

    let date = DateString::parse("2023-09-07").unwrap();
    let a = new_check_list(date);
    let b = new_check_list(date);
    assert_ne!(a.id, b.id);
    assert_eq!(a.date, b.date);
}

#[test]
fn item_serializes_as_plain_strings() {
    let item = Item::with_id("i1", "Milk");
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "i1", "name": "Milk" }));
}

#[test]
fn commands_use_tagged_camel_case_shape() {
    let check_list = CheckList::with_id("c1", DateString::parse("2023-09-07").unwrap());
    let json = serde_json::to_value(Command::add_check_list(check_list)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "addCheckList",
            "payload": { "checkList": { "id": "c1", "date": "2023-09-07" } }
        })
    );

    let json = serde_json::to_value(Command::set_checked("c1".into(), "i1".into(), true)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "setChecked",
            "payload": { "checkListId": "c1", "itemId": "i1", "checked": true }
        })
    );
}

#[test]
fn command_decoding_rejects_invalid_dates() {
    let value = serde_json::json!({
        "type": "addCheckList",
        "payload": { "checkList": { "id": "c1", "date": "2023-9-7" } }
    });
    let err = serde_json::from_value::<Command>(value).unwrap_err();
    assert!(err.to_string().contains("YYYY-MM-DD"), "unexpected error: {err}");
}

#[test]
fn renamed_keeps_identity() {
    let item = Item::new("Milk");
    let renamed = item.renamed("Oat milk");
    assert_eq!(renamed.id, item.id);
    assert_eq!(renamed.name, "Oat milk");
}

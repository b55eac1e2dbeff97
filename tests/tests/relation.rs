use minirecord::{attrs, Record, Value};
use pretty_assertions::assert_eq;
use tests::{models::*, *};

fn fnames(humans: &[Human]) -> Vec<String> {
    humans.iter().filter_map(Human::fname).collect()
}

#[test]
fn filter_on_one_column() {
    let db = setup();
    let humans = Human::filter(&db, attrs! { house_id: 1 });

    assert_eq!(humans.len().unwrap(), 2);
    assert_eq!(fnames(humans.load().unwrap()), ["Devon", "Matt"]);
}

#[test]
fn filter_on_several_columns() {
    let db = setup();
    let humans = Human::filter(&db, attrs! { fname: "Matt", house_id: 1 });

    assert_eq!(humans.len().unwrap(), 1);
    assert_eq!(humans.first().unwrap().unwrap().lname().as_deref(), Some("Rubens"));
}

#[test]
fn filter_without_matches_is_empty() {
    let db = setup();
    let humans = Human::filter(&db, attrs! { fname: "Nowhere", lname: "Man" });

    assert!(humans.is_empty().unwrap());
    assert_eq!(humans, []);
}

#[test]
fn empty_criteria_match_everything() {
    let db = setup();
    assert_eq!(Cat::filter(&db, attrs! {}).len().unwrap(), 5);
}

#[test]
fn chained_filters_merge_criteria() {
    let db = setup();

    let chained = Human::filter(&db, attrs! { house_id: 1 }).filter(attrs! { fname: "Matt" });
    let single = Human::filter(&db, attrs! { house_id: 1, fname: "Matt" });

    assert_eq!(chained.criteria(), single.criteria());
    assert_eq!(chained.to_vec().unwrap(), single.to_vec().unwrap());
}

#[test]
fn later_criteria_win_on_collision() {
    let db = setup();

    let humans = Human::filter(&db, attrs! { house_id: 1 }).filter(attrs! { house_id: 2 });

    assert_eq!(humans.criteria(), &attrs! { house_id: 2 });
    assert_eq!(fnames(humans.load().unwrap()), ["Ned"]);
}

#[test]
fn filter_leaves_the_receiver_untouched() {
    let db = setup();

    let in_house = Human::filter(&db, attrs! { house_id: 1 });
    let narrowed = in_house.filter(attrs! { fname: "Devon" });

    assert_eq!(narrowed.len().unwrap(), 1);
    assert_eq!(in_house.criteria(), &attrs! { house_id: 1 });
    assert_eq!(in_house.len().unwrap(), 2);
}

#[test]
fn to_sql_binds_criteria_in_order() {
    let db = setup();
    let humans = Human::filter(&db, attrs! { fname: "Matt", house_id: 1 });

    let (sql, params) = humans.to_sql();

    assert_eq!(sql, "SELECT * FROM humans WHERE fname = ?1 AND house_id = ?2;");
    assert_eq!(params, [Value::from("Matt"), Value::Integer(1)]);
    assert!(!humans.is_loaded());
}

#[test]
fn nothing_runs_until_observed() {
    let (db, log) = setup_logged();

    let humans = Human::filter(&db, attrs! { house_id: 1 });
    let _narrowed = humans.filter(attrs! { lname: "Watts" });

    assert!(!humans.is_loaded());
    assert!(log.is_empty());
}

#[test]
fn loads_at_most_once() {
    let (db, log) = setup_logged();
    let humans = Human::filter(&db, attrs! { house_id: 1 });

    assert_eq!(humans.len().unwrap(), 2);
    assert!(humans.first().unwrap().is_some());
    assert_eq!(humans.iter().unwrap().count(), 2);
    assert_eq!(humans.get(1).unwrap().unwrap().fname().as_deref(), Some("Matt"));
    assert!(humans.get(2).unwrap().is_none());
    let _ = humans.to_vec().unwrap();

    assert!(humans.is_loaded());
    assert_eq!(log.queries(), 1);
    assert_eq!(
        log.sql(),
        ["SELECT * FROM humans WHERE house_id = ?1;"]
    );
}

#[test]
fn loaded_results_are_not_refreshed() {
    let db = setup();
    let humans = Human::filter(&db, attrs! { house_id: 1 });
    assert_eq!(humans.len().unwrap(), 2);

    let mut newcomer = Human::new(attrs! { fname: "New", lname: "Neighbor", house_id: 1 }).unwrap();
    newcomer.insert(&db).unwrap();

    assert_eq!(humans.len().unwrap(), 2);
    assert_eq!(humans.filter(attrs! {}).len().unwrap(), 3);
}

#[test]
fn compares_with_plain_sequences() {
    let db = setup();

    let ned = Human::find(&db, 3).unwrap().unwrap();
    let humans = Human::filter(&db, attrs! { house_id: 2 });

    assert_eq!(humans, [ned.clone()]);
    assert_eq!(humans, vec![ned.clone()]);
    assert!(humans != []);
    assert!(humans == *vec![ned].as_slice());
}

#[test]
fn unknown_criteria_fail_without_querying() {
    let (db, log) = setup_logged();
    let humans = Human::filter(&db, attrs! { favorite_band: "The Eagles" });

    assert!(humans.load().unwrap_err().is_unknown_attribute());
    assert!(humans.len().unwrap_err().is_unknown_attribute());
    assert!(!humans.is_loaded());
    assert!(log.is_empty());
}

#[test]
fn failed_load_never_compares_equal() {
    let db = setup();
    let humans = Human::filter(&db, attrs! { favorite_band: "The Eagles" });

    assert!(humans != []);
    assert!(humans != Vec::new());
}

#[test]
fn into_vec_takes_the_results() {
    let db = setup();
    let cats = Cat::filter(&db, attrs! { owner_id: 3 }).into_vec().unwrap();

    let names: Vec<_> = cats.iter().filter_map(Cat::name).collect();
    assert_eq!(names, ["Haskell", "Markov"]);
}

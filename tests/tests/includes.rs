use minirecord::{attrs, Record};
use pretty_assertions::assert_eq;
use tests::{models::*, *};

#[test]
fn has_many_in_two_queries() {
    let (db, log) = setup_logged();

    let humans = Human::includes::<Cat>(&db, "cats").unwrap();

    assert_eq!(log.queries(), 2);
    assert_eq!(
        log.sql(),
        ["SELECT * FROM humans;", "SELECT * FROM cats;"]
    );

    assert_eq!(humans.len(), 4);

    let counts: Vec<_> = humans.iter().map(|human| human.associated().len()).collect();
    assert_eq!(counts, [1, 1, 2, 0]);
}

#[test]
fn belongs_to_in_two_queries() {
    let (db, log) = setup_logged();

    let cats = Cat::includes::<Human>(&db, "human").unwrap();
    assert_eq!(log.queries(), 2);

    assert_eq!(cats.len(), 5);
    assert_eq!(cats[0].one().unwrap().fname().as_deref(), Some("Devon"));
    assert_eq!(cats[3].one().unwrap().fname().as_deref(), Some("Ned"));

    // NULL foreign key
    assert_eq!(cats[4].name().as_deref(), Some("Stray Cat"));
    assert!(cats[4].associated().is_empty());
    assert_eq!(cats[4].one(), None);
}

#[test]
fn query_count_does_not_grow_with_rows() {
    let (db, mut log) = setup_logged();

    for i in 0..20 {
        let mut cat = Cat::new(attrs! { name: format!("Kitten {i}"), owner_id: i % 4 + 1 }).unwrap();
        cat.insert(&db).unwrap();
    }
    log.clear();

    let humans = Human::includes::<Cat>(&db, "cats").unwrap();

    assert_eq!(log.queries(), 2);
    let total: usize = humans.iter().map(|human| human.associated().len()).sum();
    assert_eq!(total, 24);
}

#[test]
fn matches_the_per_record_accessors() {
    let db = setup();

    for human in Human::includes::<Cat>(&db, "cats").unwrap() {
        assert_eq!(human.cats(&db).unwrap(), human.associated().to_vec());
    }

    for cat in Cat::includes::<Human>(&db, "human").unwrap() {
        assert_eq!(cat.human(&db).unwrap().as_ref(), cat.one());
    }

    for house in House::includes::<Human>(&db, "humans").unwrap() {
        assert_eq!(house.humans(&db).unwrap(), house.associated().to_vec());
    }
}

#[test]
fn records_keep_table_order() {
    let db = setup();

    let included: Vec<_> = Cat::includes::<Human>(&db, "human")
        .unwrap()
        .into_iter()
        .map(|cat| cat.into_parts().0)
        .collect();

    assert_eq!(included, Cat::all(&db).unwrap());
}

#[test]
fn rejects_bad_associations_before_querying() {
    let (db, log) = setup_logged();

    assert!(Human::includes::<Cat>(&db, "pets")
        .unwrap_err()
        .is_invalid_association());
    assert!(Human::includes::<House>(&db, "cats")
        .unwrap_err()
        .is_invalid_association());

    assert!(log.is_empty());
}

#[test]
fn through_associations_cannot_be_included() {
    let db = setup();

    // Through associations are resolved per call, never declared on the model
    assert!(Cat::includes::<House>(&db, "home")
        .unwrap_err()
        .is_invalid_association());
}

use minirecord::{attrs, Record};
use pretty_assertions::assert_eq;
use tests::{models::*, *};

#[test]
fn declared_associations_are_kept_per_type() {
    let db = setup();
    let schema = db.schema();

    let keys = |name: &str| -> Vec<String> {
        schema
            .model(name)
            .unwrap()
            .associations()
            .keys()
            .cloned()
            .collect()
    };

    assert_eq!(keys("Cat"), ["human"]);
    assert_eq!(keys("Human"), ["cats", "house"]);
    assert_eq!(keys("House"), ["humans"]);
}

#[test]
fn association_defaults() {
    let db = setup();

    let house = db.schema().model("Human").unwrap().association("house").unwrap();
    assert!(house.is_belongs_to());
    assert_eq!(house.foreign_key(), "house_id");
    assert_eq!(house.primary_key(), "id");
    assert_eq!(house.class_name(), "House");
    assert_eq!(house.table_name(db.schema()).unwrap(), "houses");

    let humans = db.schema().model("House").unwrap().association("humans").unwrap();
    assert!(humans.is_has_many());
    assert_eq!(humans.foreign_key(), "house_id");
    assert_eq!(humans.primary_key(), "id");
    assert_eq!(humans.class_name(), "Human");
}

#[test]
fn association_overrides() {
    let db = setup();

    let human = db.schema().model("Cat").unwrap().association("human").unwrap();
    assert_eq!(human.foreign_key(), "owner_id");
    assert_eq!(human.class_name(), "Human");

    let cats = db.schema().model("Human").unwrap().association("cats").unwrap();
    assert_eq!(cats.foreign_key(), "owner_id");
    assert_eq!(cats.class_name(), "Cat");
}

#[test]
fn belongs_to_fetches_the_owner() {
    let db = setup();

    let breakfast = Cat::find(&db, 1).unwrap().unwrap();
    let devon = breakfast.human(&db).unwrap().unwrap();
    assert_eq!(devon.fname().as_deref(), Some("Devon"));

    let house = devon.house(&db).unwrap().unwrap();
    assert_eq!(house.address().as_deref(), Some("26th and Guerrero"));
}

#[test]
fn belongs_to_with_null_key_is_none() {
    let db = setup();

    let stray = Cat::find(&db, 5).unwrap().unwrap();
    assert_none!(stray.human(&db).unwrap());

    let catless = Human::find(&db, 4).unwrap().unwrap();
    assert_eq!(catless.house(&db).unwrap(), None);
}

#[test]
fn belongs_to_with_dangling_key_is_none() {
    let db = setup();

    let cat = Cat::new(attrs! { name: "Ghost", owner_id: 999 }).unwrap();
    assert_eq!(cat.human(&db).unwrap(), None);
}

#[test]
fn has_many_fetches_the_owned() {
    let db = setup();

    let ned = Human::find(&db, 3).unwrap().unwrap();
    let cats = ned.cats(&db).unwrap();

    assert_eq!(cats.len().unwrap(), 2);
    let names: Vec<_> = cats.iter().unwrap().filter_map(Cat::name).collect();
    assert_eq!(names, ["Haskell", "Markov"]);

    let house = House::find(&db, 2).unwrap().unwrap();
    let humans = house.humans(&db).unwrap();
    assert_eq!(humans, [ned]);
}

#[test]
fn has_many_without_rows_is_empty() {
    let db = setup();

    let catless = Human::find(&db, 4).unwrap().unwrap();
    assert_empty!(catless.cats(&db).unwrap().load().unwrap());
    assert_eq!(catless.cats(&db).unwrap(), []);
}

#[test]
fn has_many_is_a_relation() {
    let db = setup();

    let ned = Human::find(&db, 3).unwrap().unwrap();
    let markov = ned.cats(&db).unwrap().filter(attrs! { name: "Markov" });

    assert_eq!(markov.len().unwrap(), 1);
    assert_eq!(markov.first().unwrap().unwrap().id(), Some(4));
}

#[test]
fn has_many_and_belongs_to_agree() {
    let db = setup();

    for human in Human::all(&db).unwrap() {
        for cat in human.cats(&db).unwrap().iter().unwrap() {
            assert_eq!(cat.human(&db).unwrap().as_ref(), Some(&human));
        }
    }
}

#[test]
fn generic_accessors_match_generated_ones() {
    let db = setup();
    let ned = Human::find(&db, 3).unwrap().unwrap();

    assert_eq!(
        ned.belongs_to::<House>(&db, "house").unwrap(),
        ned.house(&db).unwrap()
    );
    assert_eq!(
        ned.has_many::<Cat>(&db, "cats").unwrap().to_vec().unwrap(),
        ned.cats(&db).unwrap().to_vec().unwrap()
    );
}

#[test]
fn undeclared_association_is_rejected() {
    let db = setup();
    let cat = Cat::find(&db, 1).unwrap().unwrap();

    let err = assert_err_is!(cat.belongs_to::<Human>(&db, "owner"), is_invalid_association);
    assert_eq!(
        err.to_string(),
        "invalid association `Cat::owner`: no such association is declared"
    );
}

#[test]
fn mismatched_target_type_is_rejected() {
    let db = setup();
    let cat = Cat::find(&db, 1).unwrap().unwrap();

    let err = assert_err_is!(cat.belongs_to::<House>(&db, "human"), is_invalid_association);
    assert_eq!(
        err.to_string(),
        "invalid association `Cat::human`: targets `Human`, not `House`"
    );
}

#[test]
fn wrong_association_kind_is_rejected() {
    let db = setup();
    let human = Human::find(&db, 1).unwrap().unwrap();

    let err = assert_err_is!(human.belongs_to::<Cat>(&db, "cats"), is_unsupported_operation);
    assert_eq!(
        err.to_string(),
        "unsupported operation: `Human::cats` is a has_many association; expected belongs_to"
    );
    assert!(human
        .has_many::<House>(&db, "house")
        .unwrap_err()
        .is_unsupported_operation());
}

#[test]
fn target_must_be_registered() {
    init_tracing();

    let mut builder = minirecord::Db::builder();
    builder.register::<Cat>().schema_script(CATS_SQL);
    let db = builder.build().unwrap();

    let cat = Cat::find(&db, 1).unwrap().unwrap();
    assert!(cat.human(&db).unwrap_err().is_unknown_model());
}

use minirecord::Record;

#[derive(Debug, Clone, PartialEq, Record)]
#[belongs_to(human, foreign_key = "owner_id")]
#[has_one_through(home, through = "human", source = "house")]
pub struct Cat {
    id: Option<i64>,
    name: Option<String>,
    owner_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Record)]
#[table = "humans"]
#[has_many(cats, foreign_key = "owner_id")]
#[belongs_to(house)]
#[has_many_through(neighbors, through = "house", source = "humans")]
pub struct Human {
    id: Option<i64>,
    fname: Option<String>,
    lname: Option<String>,
    house_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Record)]
#[has_many(humans)]
pub struct House {
    id: Option<i64>,
    address: Option<String>,
}

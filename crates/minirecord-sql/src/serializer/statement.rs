use super::{Comma, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Select(select) => select.to_sql(f),
            stmt::Statement::Insert(insert) => insert.to_sql(f),
            stmt::Statement::Update(update) => update.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "SELECT ");

        match &self.projection {
            Some(table) => fmt!(f, table ".*"),
            None => fmt!(f, "*"),
        }

        let from = &self.from;
        fmt!(f, " FROM " from);

        for join in &self.joins {
            fmt!(f, join);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let on = &self.on;
        fmt!(f, " JOIN " table " ON " on);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        fmt!(f, "INSERT INTO " table);

        if self.columns.is_empty() {
            fmt!(f, " DEFAULT VALUES");
            return;
        }

        let placeholders: Vec<_> = self
            .values
            .iter()
            .map(|value| f.params.push(value))
            .collect();

        fmt!(f, " (" Comma(&self.columns) ") VALUES (" Comma(placeholders) ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        fmt!(f, "UPDATE " table " SET ");

        let mut s = "";
        for (column, value) in &self.assignments {
            let placeholder = f.params.push(value);
            fmt!(f, s column " = " placeholder);
            s = ", ";
        }

        let filter = &self.filter;
        fmt!(f, " WHERE " filter);
    }
}

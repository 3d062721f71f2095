pub mod measurement;
pub mod station;

/// A row as it comes out of sqlite, convertible into its domain model.
pub trait DatabaseRow {
    type Model;

    fn to_model(self) -> Self::Model;
}

pub fn to_models<R: DatabaseRow>(rows: Vec<R>) -> Vec<R::Model> {
    rows.into_iter().map(DatabaseRow::to_model).collect::<Vec<_>>()
}

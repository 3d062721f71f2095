use model::station::Station;
use sqlx::prelude::FromRow;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct StationRow {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl DatabaseRow for StationRow {
    type Model = Station;

    fn to_model(self) -> Self::Model {
        Station {
            id: self.id,
            station: self.station,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            elevation: self.elevation,
        }
    }
}

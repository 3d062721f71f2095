use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// A weather-reporting location, identified by its unique `station` code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl ExampleData for Station {
    fn example_data() -> Self {
        Self {
            id: 7,
            station: "USC00519281".to_owned(),
            name: "WAIHEE 837.5, HI US".to_owned(),
            latitude: 21.45167,
            longitude: -157.84889,
            elevation: 32.9,
        }
    }
}

//! Built-in catalog used to seed the in-memory store at startup.

use crate::domain::{City, PointOfInterest};

/// Cities available when the process starts.
///
/// Paris starts without points of interest.
pub fn seed_cities() -> Vec<City> {
    vec![
        City::new(1, "New York City", Some("The one with that big park.")).with_points_of_interest(vec![
            PointOfInterest::new(1, 1, "Central Park", Some("The most visited urban park in the United States.")),
            PointOfInterest::new(2, 1, "Empire State Building", Some("A 102-story skyscraper located in Midtown Manhattan.")),
        ]),
        City::new(2, "Antwerp", Some("The one with the cathedral that was never really finished."))
            .with_points_of_interest(vec![
                PointOfInterest::new(3, 2, "Cathedral of Our Lady", Some("A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.")),
                PointOfInterest::new(4, 2, "Antwerp Central Station", Some("The finest example of railway architecture in Belgium.")),
            ]),
        City::new(3, "Paris", Some("The one with that big tower.")),
    ]
}

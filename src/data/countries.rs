//! Country and school choices for the application form.
//!
//! The education select depends on the selected country; the stored
//! education value is the school's display label.

#[cfg(test)]
#[path = "countries_test.rs"]
mod countries_test;

/// A school offered for a country.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct School {
    pub name: &'static str,
    pub city: &'static str,
}

impl School {
    /// Display label, also the value stored on the form.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.city)
    }
}

/// A selectable country with its schools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub schools: &'static [School],
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "Austria",
        schools: &[
            School { name: "University of Vienna", city: "Vienna" },
            School { name: "Graz University of Technology", city: "Graz" },
            School { name: "Johannes Kepler University", city: "Linz" },
        ],
    },
    Country {
        name: "Croatia",
        schools: &[
            School { name: "University of Zagreb", city: "Zagreb" },
            School { name: "University of Split", city: "Split" },
            School { name: "University of Rijeka", city: "Rijeka" },
        ],
    },
    Country {
        name: "Germany",
        schools: &[
            School { name: "Technical University of Munich", city: "Munich" },
            School { name: "Humboldt University", city: "Berlin" },
            School { name: "Heidelberg University", city: "Heidelberg" },
        ],
    },
    Country {
        name: "Ireland",
        schools: &[
            School { name: "Trinity College", city: "Dublin" },
            School { name: "University College Cork", city: "Cork" },
        ],
    },
    Country {
        name: "Netherlands",
        schools: &[
            School { name: "Delft University of Technology", city: "Delft" },
            School { name: "University of Amsterdam", city: "Amsterdam" },
            School { name: "Utrecht University", city: "Utrecht" },
        ],
    },
    Country {
        name: "Poland",
        schools: &[
            School { name: "University of Warsaw", city: "Warsaw" },
            School { name: "Jagiellonian University", city: "Krakow" },
            School { name: "AGH University of Science and Technology", city: "Krakow" },
        ],
    },
    Country {
        name: "Spain",
        schools: &[
            School { name: "University of Barcelona", city: "Barcelona" },
            School { name: "Complutense University", city: "Madrid" },
            School { name: "University of Valencia", city: "Valencia" },
        ],
    },
    Country {
        name: "Sweden",
        schools: &[
            School { name: "KTH Royal Institute of Technology", city: "Stockholm" },
            School { name: "Lund University", city: "Lund" },
            School { name: "Uppsala University", city: "Uppsala" },
        ],
    },
];

/// Schools for the selected country; unknown countries offer none.
pub fn schools_for(country: &str) -> &'static [School] {
    COUNTRIES
        .iter()
        .find(|c| c.name == country)
        .map_or(&[], |c| c.schools)
}

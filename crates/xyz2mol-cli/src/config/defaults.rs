use xyz2mol::core::models::units::LengthUnit;

pub struct DefaultsConfig {
    pub units: LengthUnit,
    pub title: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            units: LengthUnit::Angstrom,
            title: None,
        }
    }
}

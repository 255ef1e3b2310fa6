// src/domain/vehicle.rs

/// Make / model / colour as reported upstream. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleDescriptor {
    pub make: Option<String>,
    pub model: Option<String>,
    pub colour: Option<String>,
}

impl VehicleDescriptor {
    pub fn new(make: Option<&str>, model: Option<&str>, colour: Option<&str>) -> Self {
        // Upstream sends "" as often as it omits the key.
        let clean = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(String::from);

        Self {
            make: clean(make),
            model: clean(model),
            colour: clean(colour),
        }
    }

    /// "Ford Focus", "Ford", or `None` when neither make nor model is known.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

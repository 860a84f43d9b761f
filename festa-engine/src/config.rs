//! Desk configuration
//!
//! # Environment variables
//!
//! All settings can be overridden via environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | LAYOUT_SHEET | Layout_Mesas | Sheet holding the table layout |
//! | RESERVATION_SHEET | RESERVAS | Sheet holding the reservation log |
//! | HIT_RADIUS | 25.0 | Hit-test tolerance, in reference-image pixels |

/// Engine configuration for one event
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Sheet holding the table layout (read-only from the engine's side)
    pub layout_sheet: String,
    /// Sheet holding the reservation log (appended/rewritten/deleted)
    pub reservation_sheet: String,
    /// Maximum pixel distance from a registered table position still
    /// considered a valid selection
    pub hit_radius: f64,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            layout_sheet: "Layout_Mesas".to_string(),
            reservation_sheet: "RESERVAS".to_string(),
            hit_radius: 25.0,
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables, falling back to
    /// the defaults above
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            layout_sheet: std::env::var("LAYOUT_SHEET").unwrap_or(defaults.layout_sheet),
            reservation_sheet: std::env::var("RESERVATION_SHEET")
                .unwrap_or(defaults.reservation_sheet),
            hit_radius: std::env::var("HIT_RADIUS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.hit_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_sheet() {
        let config = DeskConfig::default();
        assert_eq!(config.layout_sheet, "Layout_Mesas");
        assert_eq!(config.reservation_sheet, "RESERVAS");
        assert_eq!(config.hit_radius, 25.0);
    }
}

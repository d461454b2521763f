// Estimate result domain model
use super::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete estimate as returned by the calculation backend.
///
/// Treated as immutable for one render cycle; the next estimate replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub costs: Costs,
    pub materials: Materials,
    pub blueprint: Vec<Floor>,
    pub schedule: Vec<Phase>,
}

impl EstimateResult {
    pub fn from_json(body: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, RenderError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    #[serde(rename = "total_estimated_cost", alias = "total")]
    pub total: f64,
    #[serde(rename = "material_cost", alias = "material")]
    pub material: f64,
    #[serde(rename = "labor_cost", alias = "labor")]
    pub labor: f64,
    #[serde(rename = "overhead_cost", alias = "overhead")]
    pub overhead: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Materials {
    pub steel_tons: f64,
    pub cement_bags: f64,
    pub sand_tons: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub floor_name: String,
    pub rooms: Vec<Room>,
}

/// A room in the normalized 0-100 floor square. Bounds are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: String,
}

impl Room {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub week: WeekLabel,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Week label of a phase; the backend sends ranges like "1-2" but plain numbers occur too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekLabel {
    Number(f64),
    Text(String),
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLabel::Number(n) => write!(f, "{}", n),
            WeekLabel::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn room(name: &str, x: f64, y: f64, w: f64, h: f64, color: &str) -> Room {
        Room {
            name: name.to_string(),
            x,
            y,
            w,
            h,
            color: color.to_string(),
        }
    }

    pub fn phase(name: &str, week: &str, activities: &[&str]) -> Phase {
        Phase {
            phase: name.to_string(),
            week: WeekLabel::Text(week.to_string()),
            activities: activities.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn sample_estimate() -> EstimateResult {
        EstimateResult {
            costs: Costs {
                total: 1234567.0,
                material: 700000.0,
                labor: 400000.0,
                overhead: 134567.0,
            },
            materials: Materials {
                steel_tons: 12.0,
                cement_bags: 340.0,
                sand_tons: 20.0,
            },
            blueprint: vec![
                Floor {
                    floor_name: "Ground Floor".to_string(),
                    rooms: vec![
                        room("Living Hall", 0.0, 40.0, 60.0, 60.0, "#3b82f6"),
                        room("Kitchen", 60.0, 40.0, 40.0, 60.0, "#ef4444"),
                    ],
                },
                Floor {
                    floor_name: "Floor 1".to_string(),
                    rooms: Vec::new(),
                },
            ],
            schedule: vec![
                phase("Site Prep", "1-2", &["Site Cleaning", "Marking"]),
                phase("Foundation", "3-5", &["Excavation", "Footing"]),
            ],
        }
    }
}

use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

const MIN_WINDOW_SIDE: u32 = 100;
const MAX_WINDOW_SIDE: u32 = 4000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// `<width>x<height>` in logical pixels.
    pub geometry: String,
}

impl WindowConfig {
    pub fn inner_size(&self) -> Result<[f32; 2], String> {
        let (width, height) = parse_geometry(&self.geometry)?;
        Ok([width as f32, height as f32])
    }
}

fn parse_geometry(geometry: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("geometry must look like 600x520, got '{}'", geometry);

    let (width, height) = geometry.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;

    for side in [width, height] {
        if !(MIN_WINDOW_SIDE..=MAX_WINDOW_SIDE).contains(&side) {
            return Err(format!(
                "window sides must be between {} and {} pixels",
                MIN_WINDOW_SIDE, MAX_WINDOW_SIDE
            ));
        }
    }
    Ok((width, height))
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("window title must not be empty".to_string());
        }
        parse_geometry(&self.geometry).map(|_| ())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snake".to_string(),
            geometry: "600x520".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inner_size() {
        assert_eq!(WindowConfig::default().inner_size(), Ok([600.0, 520.0]));
    }

    #[test]
    fn test_parse_geometry_accepts_spaces_and_upper_x() {
        assert_eq!(parse_geometry(" 800 X 600 "), Ok((800, 600)));
    }

    #[test]
    fn test_parse_geometry_rejects_garbage() {
        assert!(parse_geometry("600").is_err());
        assert!(parse_geometry("600x").is_err());
        assert!(parse_geometry("wide x tall").is_err());
        assert!(parse_geometry("50x50").is_err());
        assert!(parse_geometry("5000x600").is_err());
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let config = WindowConfig {
            title: "  ".to_string(),
            ..WindowConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

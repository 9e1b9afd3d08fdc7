//! `relief regions`

use anyhow::Result;
use relief::prelude::*;

fn describe_window(window: &CropWindow) -> String {
    if window.is_unbounded() {
        return "whole grid".to_string();
    }
    let lon = window.lon_or_all();
    let lat = window.lat_or_all();
    format!(
        "lon {} to {}, lat {} to {}",
        lon.min, lon.max, lat.min, lat.max
    )
}

/// Run `relief regions`.
#[allow(clippy::unnecessary_wraps)]
pub fn execute() -> Result<()> {
    println!("{:<20} {:>6}  {:<32} Description", "Name", "mm/°", "Window");
    for region in default_regions() {
        println!(
            "{:<20} {:>6.1}  {:<32} {}",
            region.name,
            region.xy_scale,
            describe_window(&region.window),
            region.description
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn window_descriptions() {
        assert_eq!(describe_window(&CropWindow::new()), "whole grid");

        let window = CropWindow::new().with_lat(CoordRange::new(15.0, 30.0).unwrap());
        assert_eq!(describe_window(&window), "lon -180 to 180, lat 15 to 30");
    }
}

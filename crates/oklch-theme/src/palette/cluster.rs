/// One dominant color reported by a pixel-clustering routine.
///
/// `area` is the cluster's share of the image (any consistent unit works;
/// only the ordering matters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCluster {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub area: f64,
}

impl ColorCluster {
    pub fn new(red: u8, green: u8, blue: u8, area: f64) -> Self {
        Self {
            red,
            green,
            blue,
            area,
        }
    }
}

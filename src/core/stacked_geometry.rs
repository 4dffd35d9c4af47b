use serde::{Deserialize, Serialize};

use crate::core::mapper::CoordinateMapper;
use crate::core::types::PixelPoint;

/// Pixel geometry for one cumulative layer of a stacked chart.
///
/// `boundary` is the layer's cumulative curve, one vertex per point.
/// `band` is the explicitly closed fill polygon between this curve and the
/// previous layer's curve (the baseline for layer 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedLayerGeometry {
    pub layer: usize,
    pub boundary: Vec<PixelPoint>,
    pub band: Vec<PixelPoint>,
}

/// Projects cumulative layer sums into boundaries and stacked bands.
///
/// `cumulative[layer][point]` holds running sums; x is the point index.
/// Layers come back in increasing index order, which is also the order
/// they must be composited in.
#[must_use]
pub fn build_stacked_layers(
    cumulative: &[Vec<f64>],
    mapper: &CoordinateMapper,
) -> Vec<StackedLayerGeometry> {
    let baseline = mapper.baseline_y();
    let mut layers: Vec<StackedLayerGeometry> = Vec::with_capacity(cumulative.len());

    for (layer, sums) in cumulative.iter().enumerate() {
        let boundary: Vec<PixelPoint> = sums
            .iter()
            .enumerate()
            .map(|(index, sum)| mapper.map(index as f64, *sum))
            .collect();

        let band = match (boundary.first(), boundary.last()) {
            (Some(first), Some(last)) => {
                let mut band = Vec::with_capacity(boundary.len() * 2 + 1);
                match layers.last() {
                    None => {
                        band.push(PixelPoint::new(first.x, baseline));
                        band.extend(boundary.iter().copied());
                        band.push(PixelPoint::new(last.x, baseline));
                        band.push(PixelPoint::new(first.x, baseline));
                    }
                    Some(previous) => {
                        band.extend(boundary.iter().copied());
                        band.extend(previous.boundary.iter().rev().copied());
                        band.push(*first);
                    }
                }
                band
            }
            _ => Vec::new(),
        };

        layers.push(StackedLayerGeometry {
            layer,
            boundary,
            band,
        });
    }

    layers
}

use crate::model::vector::ScaledFeatureVector;
use crate::schema::{self, CATEGORY_COUNT, Stat};

#[derive(Debug, Clone, Copy)]
pub struct RadarOptions {
    pub clamp_unit_range: bool,
}

impl Default for RadarOptions {
    fn default() -> Self {
        // The chart's radial axis is pinned to [0, 1]; out-of-range scaled
        // values are clipped here unless the caller opts out.
        Self {
            clamp_unit_range: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub categories: [&'static str; CATEGORY_COUNT],
    pub mean: [f64; CATEGORY_COUNT],
    pub se: [f64; CATEGORY_COUNT],
    pub worst: [f64; CATEGORY_COUNT],
    pub clamped: bool,
}

// Partition by the schema's category table, never by key-suffix filtering
// over mapping iteration order.
pub fn project(scaled: &ScaledFeatureVector, opts: &RadarOptions) -> RadarSeries {
    let mut series = RadarSeries {
        categories: schema::category_names(),
        mean: [0f64; CATEGORY_COUNT],
        se: [0f64; CATEGORY_COUNT],
        worst: [0f64; CATEGORY_COUNT],
        clamped: opts.clamp_unit_range,
    };

    for (idx, def) in schema::features().iter().enumerate() {
        let mut value = scaled.get(idx);
        if opts.clamp_unit_range {
            value = value.clamp(0.0, 1.0);
        }
        match def.stat {
            Stat::Mean => series.mean[def.category] = value,
            Stat::Se => series.se[def.category] = value,
            Stat::Worst => series.worst[def.category] = value,
        }
    }

    series
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/radar.rs"]
mod tests;

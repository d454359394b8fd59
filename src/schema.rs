pub const FEATURE_COUNT: usize = 30;
pub const CATEGORY_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Mean,
    Se,
    Worst,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureDef {
    pub key: &'static str,
    pub label: &'static str,
    pub category: usize,
    pub stat: Stat,
}

// Training column order of the reference table: the ten mean columns, then
// the ten standard-error columns, then the ten worst-value columns. The
// classifier artifacts pin their feature lists to this exact order, and the
// radar partition goes through each entry's (category, stat) pair rather
// than key-suffix filtering.
const FEATURES: &[FeatureDef; FEATURE_COUNT] = &[
    FeatureDef {
        key: "radius_mean",
        label: "Radius (mean)",
        category: 0,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "texture_mean",
        label: "Texture (mean)",
        category: 1,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "perimeter_mean",
        label: "Perimeter (mean)",
        category: 2,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "area_mean",
        label: "Area (mean)",
        category: 3,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "smoothness_mean",
        label: "Smoothness (mean)",
        category: 4,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "compactness_mean",
        label: "Compactness (mean)",
        category: 5,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "concavity_mean",
        label: "Concavity (mean)",
        category: 6,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "concave points_mean",
        label: "Concave points (mean)",
        category: 7,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "symmetry_mean",
        label: "Symmetry (mean)",
        category: 8,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "fractal_dimension_mean",
        label: "Fractal dimension (mean)",
        category: 9,
        stat: Stat::Mean,
    },
    FeatureDef {
        key: "radius_se",
        label: "Radius (se)",
        category: 0,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "texture_se",
        label: "Texture (se)",
        category: 1,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "perimeter_se",
        label: "Perimeter (se)",
        category: 2,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "area_se",
        label: "Area (se)",
        category: 3,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "smoothness_se",
        label: "Smoothness (se)",
        category: 4,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "compactness_se",
        label: "Compactness (se)",
        category: 5,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "concavity_se",
        label: "Concavity (se)",
        category: 6,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "concave points_se",
        label: "Concave points (se)",
        category: 7,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "symmetry_se",
        label: "Symmetry (se)",
        category: 8,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "fractal_dimension_se",
        label: "Fractal dimension (se)",
        category: 9,
        stat: Stat::Se,
    },
    FeatureDef {
        key: "radius_worst",
        label: "Radius (worst)",
        category: 0,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "texture_worst",
        label: "Texture (worst)",
        category: 1,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "perimeter_worst",
        label: "Perimeter (worst)",
        category: 2,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "area_worst",
        label: "Area (worst)",
        category: 3,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "smoothness_worst",
        label: "Smoothness (worst)",
        category: 4,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "compactness_worst",
        label: "Compactness (worst)",
        category: 5,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "concavity_worst",
        label: "Concavity (worst)",
        category: 6,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "concave points_worst",
        label: "Concave points (worst)",
        category: 7,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "symmetry_worst",
        label: "Symmetry (worst)",
        category: 8,
        stat: Stat::Worst,
    },
    FeatureDef {
        key: "fractal_dimension_worst",
        label: "Fractal dimension (worst)",
        category: 9,
        stat: Stat::Worst,
    },
];

// Angular axis order of the radar chart, shared by all three series.
const CATEGORY_NAMES: &[&str; CATEGORY_COUNT] = &[
    "Radius",
    "Texture",
    "Perimeter",
    "Area",
    "Smoothness",
    "Compactness",
    "Concavity",
    "Concave Points",
    "Symmetry",
    "Fractal Dimension",
];

pub fn features() -> &'static [FeatureDef] {
    FEATURES
}

pub fn feature_index(key: &str) -> Option<usize> {
    FEATURES.iter().position(|def| def.key == key)
}

pub fn feature_key(index: usize) -> &'static str {
    FEATURES[index].key
}

pub fn category_names() -> [&'static str; CATEGORY_COUNT] {
    *CATEGORY_NAMES
}

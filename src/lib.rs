pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod anchoredlinearcurve;
        }
    }
    pub mod integration {
        pub mod trapezoid;
    }
    pub mod round;
}

pub mod roc {
    pub mod aurocerror;
    pub mod validation;
    pub mod partialareacalculator;
    pub mod evaluationrange;
    pub mod roccurve;
}

pub use roc::aurocerror::{
    Axis,
    PartialAurocError,
    RangeBound
};
pub use roc::partialareacalculator::{
    auc,
    compute,
    compute_from_json
};
pub use roc::roccurve::{
    rank_auc,
    RocCurve
};

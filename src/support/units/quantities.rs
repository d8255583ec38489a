use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N3, P1, P2, Z0},
};

/// Gas throughput, Pa·m³/s in SI.
pub type GasThroughput = Quantity<ISQ<P2, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

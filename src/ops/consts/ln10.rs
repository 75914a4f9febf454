//! Natural logarithm of 10.

use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

use crate::common::consts::TEN;
use crate::dec::Dec;
use crate::defs::Scale;

const SEED_SCALE: Scale = 20;

lazy_static! {
    static ref CACHE: RwLock<Arc<Dec>> = RwLock::new(Arc::new(compute(SEED_SCALE)));
}

fn compute(scale: Scale) -> Dec {
    TEN.ln_positive(scale)
}

pub(crate) fn for_scale(scale: Scale) -> Dec {
    {
        let cached = CACHE.read().unwrap_or_else(|p| p.into_inner());
        if cached.scale() >= scale {
            return cached.rescale(scale);
        }
    }

    let fresh = Arc::new(compute(scale));

    let mut cached = CACHE.write().unwrap_or_else(|p| p.into_inner());
    if cached.scale() < scale {
        *cached = fresh;
    }
    cached.rescale(scale)
}

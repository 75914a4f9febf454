//! Euler's number.

use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

use crate::common::consts::ONE;
use crate::dec::Dec;
use crate::defs::Scale;

// scale of the value computed when the cache first loads
const SEED_SCALE: Scale = 20;

lazy_static! {
    static ref CACHE: RwLock<Arc<Dec>> = RwLock::new(Arc::new(compute(SEED_SCALE)));
}

// e = sum 1/n!, summed until the next term vanishes at the working scale.
fn compute(scale: Scale) -> Dec {
    let ws = scale + 4;
    let eps = Dec::new(1, ws);

    let mut sum = Dec::new(2, 0); // 1 + 1/1!
    let mut term = ONE.clone();
    let mut n = 2i64;
    loop {
        term = term.div_to_scale(&Dec::new(n, 0), ws);
        if term < eps {
            break;
        }
        sum = sum.add(&term);
        n += 1;
    }

    sum.rescale(scale)
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

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_compute_matches_reference() {
        assert_eq!(
            compute(40).to_string(),
            "2.7182818284590452353602874713526624977572"
        );
    }
}

//! Static constants.

use crate::dec::Dec;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: Dec = Dec::new(1, 0);

    /// 2
    pub(crate) static ref TWO: Dec = Dec::new(2, 0);

    /// 3
    pub(crate) static ref THREE: Dec = Dec::new(3, 0);

    /// 10
    pub(crate) static ref TEN: Dec = Dec::new(10, 0);

    /// 0.1, the width of the logarithm reduction band
    pub(crate) static ref TENTH: Dec = Dec::new(1, 1);
}

//! Serialization of Dec.
//! Serialization to a string uses plain decimal notation.

use crate::Dec;
use serde::{Serialize, Serializer};

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::Dec;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&Dec::new(0, 1)).unwrap(), "\"0.0\"");
        assert_eq!(to_string(&Dec::new(-1232, 1)).unwrap(), "\"-123.2\"");
        assert_eq!(
            to_string(&Dec::from_f64(0.00000121)).unwrap(),
            "\"0.00000121\""
        );
    }
}

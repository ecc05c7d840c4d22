//! Small utilities shared across the crate: a timing macro and the serde
//! glue for maps keyed by points.

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, evaluates it, and logs the elapsed time at the given level
/// (default `Debug`) before yielding the value.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

// Serialize an AxialPointIndexMap as a list of (point, value) pairs instead
// of a map. This is necessary because points generally shouldn't be used as
// serialized map keys; JSON and other formats don't support complex keys.
pub mod serde_axial_point_map_to_pairs {
    use crate::hex::{AxialPoint, AxialPointIndexMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a point map as a list of pairs
    pub fn serialize<T, S>(
        map: &AxialPointIndexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for pair in map {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }

    /// Deserialize a list of `(point, value)` pairs back into a map. Pair
    /// order in the input becomes insertion order in the map.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<AxialPointIndexMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(AxialPoint, T)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{AxialPoint, HexMap};

    #[test]
    fn test_map_serde_round_trip() {
        let mut map = HexMap::new();
        map.insert(AxialPoint::new(0, 0), "center".to_owned());
        map.insert(AxialPoint::new(2, -1), "spoke".to_owned());

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"cells":[[{"q":0,"r":0},"center"],[{"q":2,"r":-1},"spoke"]]}"#
        );

        let parsed: HexMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_map_deserialize_order() {
        // Pair order in the input becomes iteration order
        let json = r#"{"cells":[[{"q":1,"r":0},"b"],[{"q":0,"r":0},"a"]]}"#;
        let map: HexMap<String> = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec![AxialPoint::new(1, 0), AxialPoint::new(0, 0)]);
    }
}

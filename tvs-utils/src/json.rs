use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{Read, Write};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes with object keys sorted recursively, so equal values always
/// produce byte-identical JSON.
pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    let value = serde_json::to_value(obj).expect("to_value failed on serializable object");
    serde_json::to_string(&sort_keys(&value)).expect("to_string failed on serializable object")
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut sorted = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&obj[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}

pub fn compress_obj<T>(input: T) -> Vec<u8>
where
    T: Serialize,
{
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(jsonify(&input).as_bytes())
        .expect("write to in-memory encoder failed");
    encoder.finish().expect("zlib compression failed")
}

pub fn decompress_obj<T>(input: &[u8]) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let mut decoder = ZlibDecoder::new(input);
    let mut json_str = String::new();
    decoder.read_to_string(&mut json_str)?;
    Ok(dejsonify(&json_str)?)
}

use serde::{Deserialize, Serialize};
use tvs_utils::{compress_obj, decompress_obj, dejsonify, jsonify};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Window {
    start: u32,
    end: u32,
    genre: String,
}

#[test]
fn test_jsonify_sorts_keys() {
    let window = Window {
        start: 30,
        end: 90,
        genre: "news".to_string(),
    };
    assert_eq!(jsonify(&window), r#"{"end":90,"genre":"news","start":30}"#);
}

#[test]
fn test_jsonify_sorts_keys_inside_arrays() {
    let windows = vec![
        Window {
            start: 0,
            end: 60,
            genre: "kids".to_string(),
        },
        Window {
            start: 60,
            end: 90,
            genre: "sports".to_string(),
        },
    ];
    assert_eq!(
        jsonify(&windows),
        r#"[{"end":60,"genre":"kids","start":0},{"end":90,"genre":"sports","start":60}]"#
    );
}

#[test]
fn test_dejsonify_ignores_field_order() {
    let window: Window = dejsonify(r#"{"genre":"kids","end":60,"start":0}"#).unwrap();
    assert_eq!(
        window,
        Window {
            start: 0,
            end: 60,
            genre: "kids".to_string(),
        }
    );
}

#[test]
fn test_compress_decompress_obj() {
    let window = Window {
        start: 120,
        end: 240,
        genre: "documentary".to_string(),
    };
    let compressed = compress_obj(&window);
    assert!(!compressed.is_empty());

    let restored: Window = decompress_obj(&compressed).unwrap();
    assert_eq!(restored, window);
}

#[test]
fn test_decompress_obj_rejects_garbage() {
    assert!(decompress_obj::<Window>(&[0, 1, 2, 3]).is_err());
}

use minitrees::prelude::*;

use std::io::BufReader;

// The tree grown by every test below:
//
//   ├── [weather] default: Yes
//   │   ├── Rainy:
//   │   │   ├── No
//   │   ├── Sunny:
//   │   │   ├── Yes
//
// `Yes` holds the majority (2 of 3 rows),
// so it is the fallback for weather values never seen in training.


fn training_examples() -> Sample {
    let bytes = &b"\
        weather,wind,class\n\
        Sunny,Weak,Yes\n\
        Sunny,Strong,Yes\n\
        Rainy,Weak,No\n\
    "[..];
    Sample::from_reader(BufReader::new(bytes), true)
        .unwrap()
        .set_target("class")
        .unwrap()
}


fn grown_tree() -> DecisionTreeClassifier {
    let sample = training_examples();
    DecisionTreeBuilder::new(&sample)
        .build()
        .fit(&sample)
        .unwrap()
}


#[test]
fn unseen_value_falls_back_to_the_default_label() {
    let f = grown_tree();

    // `Cloudy` was never observed,
    // so the branch answers with its own majority label.
    let unseen = Sample::from_reader(
        BufReader::new(&b"weather,wind\nCloudy,Weak\n"[..]),
        true,
    )
    .unwrap();

    let result = f.predict(&unseen, 0);
    let expect = f.root().label();
    assert_eq!(result, expect, "expected {expect}, got {result}.");
    assert_eq!(expect, "Yes");
}


#[test]
fn predictions_stay_in_the_observed_domain() {
    let f = grown_tree();

    let test_rows = Sample::from_reader(
        BufReader::new(&b"\
            weather,wind\n\
            Cloudy,Weak\n\
            Snowy,Gusty\n\
            Rainy,Strong\n\
            Sunny,Weak\n\
        "[..]),
        true,
    )
    .unwrap();

    for label in f.predict_all(&test_rows) {
        assert!(
            label == "Yes" || label == "No",
            "predicted a label never observed in training: {label}.",
        );
    }
}


#[test]
fn predict_all_keeps_the_row_order() {
    let f = grown_tree();
    let sample = training_examples();

    let result = f.predict_all(&sample);
    let expect = vec!["Yes", "Yes", "No"];
    assert_eq!(result, expect, "expected {expect:?}, got {result:?}.");
}


#[test]
fn display_dumps_every_level() {
    let bytes = &b"\
        first,second,class\n\
        L,A,Yes\n\
        L,A,Yes\n\
        L,B,No\n\
        R,A,No\n\
        R,A,No\n\
        R,B,Yes\n\
    "[..];
    let sample = Sample::from_reader(BufReader::new(bytes), true)
        .unwrap()
        .set_target("class")
        .unwrap();
    let f = DecisionTreeBuilder::new(&sample)
        .build()
        .fit(&sample)
        .unwrap();
    assert_eq!(f.depth(), 2);

    // Both levels of splits show up in the dump,
    // as do the deepest leaves.
    let dump = format!("{f}");
    println!("{dump}");
    assert!(dump.contains("├── [first] default: "));
    assert!(dump.contains("├── [second] default: "));
    assert!(dump.contains("│   │   │   │   ├── Yes"));
    assert!(dump.contains("│   │   │   │   ├── No"));
}


#[test]
fn classifier_survives_a_json_trip() {
    let f = grown_tree();

    let json = serde_json::to_string(&f).unwrap();
    let g: DecisionTreeClassifier = serde_json::from_str(&json).unwrap();
    assert_eq!(f, g);
}


#[test]
fn dot_file_lists_every_leaf() {
    let f = grown_tree();

    std::fs::create_dir_all("tests/output").unwrap();
    let path = "tests/output/result.dot";
    f.to_dot_file(path).unwrap();

    let dot = std::fs::read_to_string(path).unwrap();
    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.contains("weather = ?"));
    assert!(dot.contains("shape = box"));
    assert!(dot.contains("Rainy"));
    assert!(dot.contains("Sunny"));
}

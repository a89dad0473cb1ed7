use dnc_trace::input::{parse_closest_pair_input, parse_karatsuba_input, InputError};
use dnc_trace::{run_input, Algorithm};

#[test]
fn closest_pair_failure_modes() {
    let cases: &[(&str, InputError)] = &[
        ("", InputError::Empty),
        ("  \n\n \t\n", InputError::Empty),
        ("abc\n1 2\n3 4\n", InputError::InvalidCount),
        ("0\n", InputError::InvalidCount),
        ("-2\n1 1\n2 2\n", InputError::InvalidCount),
        (
            "3\n1 1\n2 2\n",
            InputError::MissingPoints {
                expected: 3,
                found: 2,
            },
        ),
        ("2\n1 1\n2\n", InputError::InvalidPointFormat { line: 3 }),
        ("2\n1 1\n2 y\n", InputError::InvalidCoordinates { line: 3 }),
        ("2\n1 NaN\n2 2\n", InputError::InvalidCoordinates { line: 2 }),
        ("2\ninf 1\n2 2\n", InputError::InvalidCoordinates { line: 2 }),
        ("1\n5 5\n", InputError::TooFewPoints),
    ];
    for (text, expected) in cases {
        assert_eq!(
            parse_closest_pair_input(text).as_ref(),
            Err(expected),
            "input {text:?}"
        );
    }
}

#[test]
fn closest_pair_ignores_extra_tokens_and_lines() {
    let points = parse_closest_pair_input("2\n1 2 extra\n3 4\n5 6\n").expect("valid");
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].x, points[0].y, points[0].id), (1.0, 2.0, 0));
    assert_eq!((points[1].x, points[1].y, points[1].id), (3.0, 4.0, 1));
}

#[test]
fn scientific_and_negative_coordinates() {
    let points = parse_closest_pair_input("2\n-1.5e2 0.25\n3 -4\n").expect("valid");
    assert_eq!(points[0].x, -150.0);
    assert_eq!(points[1].y, -4.0);
}

#[test]
fn karatsuba_failure_modes() {
    assert_eq!(parse_karatsuba_input(""), Err(InputError::MissingOperands));
    assert_eq!(
        parse_karatsuba_input("12345\n\n\n"),
        Err(InputError::MissingOperands)
    );
    assert_eq!(
        parse_karatsuba_input("abc\n123\n"),
        Err(InputError::EmptyOperand { line: 1 })
    );
}

#[test]
fn karatsuba_keeps_leading_zeros_for_the_engine() {
    let (a, b) = parse_karatsuba_input("007\n0\n").expect("valid");
    assert_eq!((a.as_str(), b.as_str()), ("007", "0"));
}

#[test]
fn messages_are_user_facing() {
    assert_eq!(InputError::Empty.to_string(), "empty file");
    assert_eq!(
        InputError::MissingPoints {
            expected: 5,
            found: 1
        }
        .to_string(),
        "expected 5 points, but found 1"
    );
    assert_eq!(
        InputError::MissingOperands.to_string(),
        "need two numbers (one per line)"
    );
}

#[test]
fn run_input_surfaces_validation_errors() {
    assert_eq!(
        run_input(Algorithm::ClosestPair, "x\n").unwrap_err(),
        InputError::InvalidCount
    );
    let run = run_input(Algorithm::IntegerMultiplication, "1,000\n1,000\n").expect("valid");
    assert!(run.summary().ends_with("1000000"));
}

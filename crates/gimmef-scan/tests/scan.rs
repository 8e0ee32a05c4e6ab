use gimmef_scan::{compile, scan, targets, ErrorKind, Pattern, Target};

#[test]
fn test_strings() {
    let (mut ws, mut mode) = (String::new(), String::new());
    scan(
        "data-lake-ws-deepspace-read-yooo",
        "data-lake-ws-%s-read-%s",
        targets![ws, mode],
    )
    .unwrap();
    assert_eq!(ws, "deepspace");
    assert_eq!(mode, "yooo");
}

#[test]
fn test_literal_skeleton_yields_words_in_order() {
    let words = ["alpha", "beta", "gamma"];
    let input = format!("<{}|{}|{}>", words[0], words[1], words[2]);
    let (mut a, mut b, mut c) = (String::new(), String::new(), String::new());
    scan(&input, "<%s|%s|%s>", targets![a, b, c]).unwrap();
    assert_eq!([a, b, c], words.map(String::from));
}

#[test]
fn test_width_and_leading_whitespace() {
    let mut s = String::new();
    scan("   abcdefghijk", "%5s", targets![s]).unwrap();
    assert_eq!(s, "abcde");
}

#[test]
fn test_width_leaves_rest_for_adjacent_verb() {
    let (mut head, mut tail) = (String::new(), String::new());
    scan("abcdefghijk", "%5s%s", targets![head, tail]).unwrap();
    assert_eq!(head, "abcde");
    assert_eq!(tail, "fghijk");
}

#[test]
fn test_adjacent_int_and_string() {
    let (mut n, mut s) = (0i32, String::new());
    scan("   123456foo", "%d%s", targets![n, s]).unwrap();
    assert_eq!(n, 123456);
    assert_eq!(s, "foo");
}

#[test]
fn test_substring_inside_sentence() {
    let mut s = String::new();
    scan(
        "I have a sentence that might contain      this fragment of text",
        "might contain %s fragment",
        targets![s],
    )
    .unwrap();
    assert_eq!(s, "this");
}

#[test]
fn test_ints() {
    let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
    scan("1000 + -2000 = -1000", "%d + %d = %d", targets![a, b, c]).unwrap();
    assert_eq!((a, b, c), (1000, -2000, -1000));
}

#[test]
fn test_big_ints() {
    let (mut a, mut b, mut c) = (0i64, 0u64, 0isize);
    scan(
        "10000000000 + 20000000000 = 30000000000",
        "%d + %d = %d",
        targets![a, b, c],
    )
    .unwrap();
    assert_eq!(a, 10_000_000_000);
    assert_eq!(b, 20_000_000_000);
    assert_eq!(c as i64, 30_000_000_000);
}

#[test]
fn test_int_overflow_for_target_width() {
    let mut n = 0i8;
    let err = scan("count: 128", "count: %d", targets![n]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(err.target_index(), Some(0));
}

#[test]
fn test_bools() {
    let (mut employed, mut retired, mut part_time) = (false, true, true);
    scan(
        "employed: 1, retired: FALSE, part-time: f",
        "employed: %t, retired: %t, part-time: %t",
        targets![employed, retired, part_time],
    )
    .unwrap();
    assert!(employed);
    assert!(!retired);
    assert!(!part_time);
}

#[test]
fn test_percent_escape() {
    let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
    scan("50% of 100 is 50", "%d%% of %d is %d", targets![a, b, c]).unwrap();
    assert_eq!((a, b, c), (50, 100, 50));
}

#[test]
fn test_multiple_candidates_resolve_to_tightest() {
    let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
    scan(
        "and a 1 and a 2 and 3! and a 2 and a 3 and a 4!",
        "and a %d and a %d and a %d!",
        targets![a, b, c],
    )
    .unwrap();
    assert_eq!((a, b, c), (2, 3, 4));
}

#[test]
fn test_unsupported_verb() {
    let (mut a, mut b) = (0i32, 0i32);
    let err = scan(
        "fido was a very good boy",
        "%s was a very good %z",
        targets![a, b],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadArgument);
    assert_eq!(
        err.to_string(),
        "parsing format: bad argument: unsupported verb '%z'"
    );
}

#[test]
fn test_consecutive_same_verbs() {
    let (mut a, mut b) = (0i32, 0i32);
    let err = scan(
        "two numbers 100200 went for a walk",
        "two numbers %d%d went for a walk",
        targets![a, b],
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "parsing format: bad argument: found consecutive instances of verb '%d' without a max width or intervening substring"
    );
}

#[test]
fn test_segment_not_found() {
    let (mut a, mut b) = (String::new(), String::new());
    let err = scan(
        r#""What a beautiful hot air balloon?" said Heidi."#,
        r#""What a beautiful %s!" said %s."#,
        targets![a, b],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoMatch);
    assert_eq!(
        err.to_string(),
        r#"capturing from input: input does not match format: could not find substring '!" said ' in '"What a beautiful hot air balloon?" said Heidi.'"#
    );
}

#[test]
fn test_segments_out_of_order() {
    let mut s = String::new();
    let err = scan("just that way, I want it", "I want %s that way", targets![s]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoMatch);
    assert_eq!(
        err.to_string(),
        "capturing from input: input does not match format"
    );
}

#[test]
fn test_too_few_captures() {
    let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
    let err = scan(
        "and a 1 and a 2 and a !",
        "and a %d and a %d and a %d!",
        targets![a, b, c],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoMatch);
}

#[test]
fn test_multiple_matches() {
    let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
    let err = scan(
        "and a 1 and a 2 and a 3! and a 2 and a 3 and a 4!",
        "and a %d and a %d and a %d!",
        targets![a, b, c],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MultipleMatches);
    assert_eq!(
        err.to_string(),
        "capturing from input: input matches format more than once: found 2; need 1"
    );
}

#[test]
fn test_empty_capture_at_end() {
    let mut n = 0i32;
    let err = scan("the number is ", "the number is %d", targets![n]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyCapture);
    assert!(err.to_string().ends_with("for final verb '%d'"));
}

#[test]
fn test_whitespace_remainder_scans_as_empty_string() {
    let (mut n, mut s) = (0i32, String::from("stale"));
    scan("12   ", "%d%s", targets![n, s]).unwrap();
    assert_eq!(n, 12);
    assert_eq!(s, "");

    let mut s = String::from("stale");
    scan("x   is here", "x%s is here", targets![s]).unwrap();
    assert_eq!(s, "");
}

#[test]
fn test_width_truncates_integer() {
    let mut n = 0i64;
    scan("count 12345", "count %2d", targets![n]).unwrap();
    assert_eq!(n, 12);
}

#[test]
fn test_whitespace_remainder_fails_integer() {
    let mut n = 0i32;
    let err = scan("x   is here", "x%d is here", targets![n]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(err.target_index(), Some(0));
}

#[test]
fn test_wrong_target_type() {
    let (mut s, mut n) = (String::new(), 0i32);
    let err = scan(
        "Gimme a number, any number",
        "Gimme a %s, any %s",
        targets![s, n],
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(err.target_index(), Some(1));
    assert_eq!(
        err.to_string(),
        "assigning values to targets: at index 1: expected string target, got i32"
    );
    assert_eq!(s, "number");
}

#[test]
fn test_bad_arguments() {
    let mut n = 0i32;
    for (input, format) in [("1", ""), ("", "%d")] {
        let err = scan(input, format, targets![n]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
    }

    let err = scan("1", "%d", &mut []).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadArgument);

    let mut m = 0i32;
    let err = scan("1 2", "%d %d %d", targets![n, m]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad argument: found 3 verbs for 2 targets; count must match"
    );
}

#[test]
fn test_story() {
    let story = "Once upon a time, there was a cat named Lola. \n\
                 She liked to curl up in our yard. \n\
                 Her favorite color is yellow and her favorite number is 3, but that's silly, because she's a cat.";
    let (mut what, mut three) = (String::new(), 0i32);
    scan(story, "and her %s is %d, but", targets![what, three]).unwrap();
    assert_eq!(what, "favorite number");
    assert_eq!(three, 3);

    // Both commas after "is 3" close a complete alignment
    let err = scan(story, "and her %s is %d,", targets![what, three]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MultipleMatches);
}

#[test]
fn test_reuse_compiled_pattern() {
    let pattern = compile("%5s%d").unwrap();
    let (mut s, mut n) = (String::new(), 0i32);

    pattern.scan("f00 22", targets![s, n]).unwrap();
    assert_eq!((s.as_str(), n), ("f00", 22));

    pattern.scan("foo221000", targets![s, n]).unwrap();
    assert_eq!((s.as_str(), n), ("foo22", 1000));

    pattern.scan("blue 42 set hut hut!", targets![s, n]).unwrap();
    assert_eq!((s.as_str(), n), ("blue", 42));
}

#[test]
fn test_compile_is_deterministic() {
    let format = "%d%% of %3s is %t";
    assert_eq!(compile(format).unwrap(), compile(format).unwrap());

    let pattern = compile("x=%d, y=%s").unwrap();
    let run = |input: &str| {
        let (mut x, mut y) = (0i64, String::new());
        pattern.scan(input, targets![x, y]).unwrap();
        (x, y)
    };
    assert_eq!(run("x=3, y=up"), run("x=3, y=up"));
}

#[test]
fn test_compile_error_has_context() {
    let err = compile("%q").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parsing format: bad argument: unsupported verb '%q'"
    );
    assert!(Pattern::compile("%q").unwrap_err().to_string().starts_with("bad argument"));
}

#[test]
fn test_explicit_targets() {
    let (mut flag, mut count) = (false, 0usize);
    let mut slots = [Target::from(&mut flag), Target::from(&mut count)];
    scan("ready=true count=12", "ready=%t count=%d", &mut slots).unwrap();
    assert!(flag);
    assert_eq!(count, 12);
}

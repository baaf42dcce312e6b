/// End-to-end tests for the tokenizer and the echo loop
/// Demonstrates: Tokenizer → TokenStream → Repl output working together
use crisp::lexer::{tokenize, Tokenizer};
use crisp::repl::{run_batch, Control, OutputFormat, Repl, ReplConfig};
use std::io::Cursor;

#[test]
fn test_e2e_documented_examples() {
    let cases: &[(&str, &[&str])] = &[
        ("", &[]),
        ("   ", &[]),
        ("(+ 1 2)", &["(", "+", "1", "2", ")"]),
        ("(())", &["(", "(", ")", ")"]),
        ("(define x 10)", &["(", "define", "x", "10", ")"]),
        ("(abc)", &["(", "abc", ")"]),
    ];

    for (source, expected) in cases {
        let tokens = tokenize(source);
        assert_eq!(tokens.texts(), expected.to_vec(), "tokenizing {:?}", source);

        // Re-joining with single spaces reproduces the same stream
        let rejoined = tokenize(&tokens.to_string());
        assert_eq!(rejoined, tokens, "re-tokenizing {:?}", source);
    }
}

#[test]
fn test_e2e_nested_program() {
    let source = "(define (square x) (* x x))";
    let tokens = Tokenizer::new(source).tokens();

    assert_eq!(tokens.len(), 12);
    assert_eq!(tokens.depth_balance(), 0);
    assert!(tokens[0].is_left_paren());
    assert_eq!(tokens[1], "define");
    assert!(tokens[11].is_right_paren());

    let atoms: Vec<&str> = tokens
        .as_slice()
        .iter()
        .filter(|token| token.is_atom())
        .map(|token| token.as_str())
        .collect();
    assert_eq!(atoms, vec!["define", "square", "x", "*", "x", "x"]);

    let owned = tokens.into_vec();
    assert_eq!(owned.len(), 12);
    assert_eq!(owned[3], "square");
}

#[test]
fn test_e2e_session() {
    let input = "(define x 10)\n  (+ x   1)  \nfoo(bar)\n(quit)\n";
    let mut output = Vec::new();

    let mut repl = Repl::new(ReplConfig::default(), Cursor::new(input), &mut output);
    let echoed = repl.run().unwrap();
    drop(repl);

    assert_eq!(echoed, 3);
    let text = String::from_utf8(output).unwrap();
    let echoes: Vec<&str> = text
        .split("crisp >> ")
        .filter(|chunk| !chunk.is_empty())
        .collect();
    assert_eq!(
        echoes,
        vec![
            "      >> ( define x 10 )\n",
            "      >> ( + x 1 )\n",
            "      >> foo ( bar )\n",
        ]
    );
}

#[test]
fn test_e2e_sentinel_must_match_exactly() {
    let input = "(quit) \n( quit )\n(quit)\n";
    let mut repl = Repl::new(ReplConfig::default(), Cursor::new(input), Vec::new());

    assert_eq!(repl.step().unwrap(), Control::Continue);
    assert_eq!(repl.step().unwrap(), Control::Continue);
    assert_eq!(repl.step().unwrap(), Control::Quit);

    let (_, output) = repl.into_parts();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("      >> ( quit )\n").count(), 2);
}

#[test]
fn test_e2e_custom_config_json() {
    let config = ReplConfig {
        prompt: "> ".to_string(),
        output_prompt: "= ".to_string(),
        quit_sentinel: ":q".to_string(),
        format: OutputFormat::Json,
    };
    let mut output = Vec::new();
    let echoed = run_batch(&config, Cursor::new("(a b)\n:q\n(c)\n"), &mut output).unwrap();

    assert_eq!(echoed, 1);
    assert_eq!(String::from_utf8(output).unwrap(), "= [\"(\",\"a\",\"b\",\")\"]\n");
}

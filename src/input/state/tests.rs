use super::*;
use crate::config::{KeybindingsConfig, SymbolsConfig};
use crate::engine::Operator;
use crate::input::events::{Key, KeyPress, parse_key_sequence};
use crate::input::keymap::Keymap;
use crate::input::modifiers::Modifiers;
use crate::input::token::{Digit, Token};
use proptest::prelude::*;

fn create_test_state() -> CalculatorState {
    let keymap = Keymap::from_config(&KeybindingsConfig::default()).unwrap();
    CalculatorState::new(SymbolsConfig::default(), keymap)
}

fn feed(state: &mut CalculatorState, keys: &str) {
    for press in parse_key_sequence(keys).unwrap() {
        state.on_key_press(press);
    }
}

fn run(keys: &str) -> CalculatorState {
    let mut state = create_test_state();
    feed(&mut state, keys);
    state
}

fn assert_display(state: &CalculatorState, expression: &str, operand: &str) {
    assert_eq!(state.expression(), expression, "expression line");
    assert_eq!(state.operand().as_str(), operand, "operand line");
}

#[test]
fn test_initial_state() {
    let state = create_test_state();
    assert_display(&state, "", "0");
    assert!(state.current_operator().is_none());
    assert!(state.last_operation().is_none());
    assert!(state.last_result().is_none());
    assert!(state.needs_redraw);
}

#[test]
fn test_digits_replace_default_then_append() {
    let state = run("05");
    assert_display(&state, "", "5");

    let state = run("005");
    assert_display(&state, "", "5");

    let state = run("0550");
    assert_display(&state, "", "550");
}

#[test]
fn test_decimal_point_is_idempotent() {
    let state = run(".5.");
    assert_display(&state, "", "0.5");

    let state = run("3..1.4");
    assert_display(&state, "", "3.14");
}

#[test]
fn test_fresh_operator_moves_operand_to_expression() {
    let state = run("12+");
    assert_display(&state, "12+", "0");
    assert_eq!(state.current_operator(), Some(Operator::Add));
    assert_eq!(
        state.pending(),
        Some(PendingOperation {
            lhs: 12.0,
            operator: Operator::Add,
        })
    );
}

#[test]
fn test_fresh_operator_drops_trailing_point() {
    let state = run("3.+");
    assert_display(&state, "3+", "0");
}

#[test]
fn test_operator_from_default_uses_zero() {
    let state = run("*");
    assert_display(&state, "0*", "0");
}

#[test]
fn test_operator_substitution() {
    let state = run("5+*");
    assert_display(&state, "5*", "0");
    assert_eq!(state.current_operator(), Some(Operator::Multiply));

    let state = run("5+*-/");
    assert_display(&state, "5/", "0");
}

#[test]
fn test_simple_equals() {
    let state = run("5+3=");
    assert_display(&state, "5+3", "8");
    assert_eq!(state.last_result(), Some(8.0));
    assert_eq!(
        state.last_operation(),
        Some(LastOperation {
            num1: 5.0,
            num2: 3.0,
            operator: Operator::Add,
        })
    );
}

#[test]
fn test_equals_repeat() {
    let mut state = run("5+3=");
    assert_display(&state, "5+3", "8");

    feed(&mut state, "=");
    assert_display(&state, "8+3", "11");

    feed(&mut state, "=");
    assert_display(&state, "11+3", "14");
}

#[test]
fn test_equals_repeat_applies_to_newly_typed_operand() {
    let state = run("5+3=4=");
    assert_display(&state, "4+3", "7");
}

#[test]
fn test_equals_repeat_with_subtraction_keeps_order() {
    let state = run("10-4==");
    assert_display(&state, "6-4", "2");
}

#[test]
fn test_chained_evaluation() {
    let mut state = run("5+3+");
    assert_display(&state, "5+3", "8");
    assert_eq!(state.current_operator(), Some(Operator::Add));
    assert_eq!(state.last_result(), Some(8.0));

    feed(&mut state, "2");
    assert_display(&state, "5+3", "2");

    feed(&mut state, "=");
    assert_display(&state, "8+2", "10");
}

#[test]
fn test_chain_switches_to_new_operator() {
    let state = run("2+3*4=");
    // (2 + 3) * 4, left to right
    assert_display(&state, "5*4", "20");
}

#[test]
fn test_operator_after_chain_starts_fresh_operation() {
    let mut state = run("5+3+*");
    assert_display(&state, "8*", "0");
    assert_eq!(state.current_operator(), Some(Operator::Multiply));
    assert!(state.last_operation().is_none());
    assert!(state.last_result().is_none());

    feed(&mut state, "2=");
    assert_display(&state, "8*2", "16");
}

#[test]
fn test_equals_after_operator_after_chain_uses_default() {
    let state = run("5+3+*=");
    assert_display(&state, "8*0", "0");
}

#[test]
fn test_equals_right_after_chain_repeats_last_operation() {
    let mut state = run("5+3+=");
    assert_display(&state, "8+3", "11");
    assert!(state.pending().is_none());

    feed(&mut state, "=");
    assert_display(&state, "11+3", "14");
}

#[test]
fn test_operator_after_equals_starts_from_result() {
    let state = run("5+3=*2=");
    assert_display(&state, "8*2", "16");
}

#[test]
fn test_fresh_operator_clears_last_operation() {
    let state = run("5+3=*");
    assert_display(&state, "8*", "0");
    assert!(state.last_operation().is_none());
    assert!(state.last_result().is_none());
}

#[test]
fn test_equals_without_operator_is_noop() {
    let mut state = run("42");
    state.needs_redraw = false;
    feed(&mut state, "=");
    assert_display(&state, "", "42");
    assert!(!state.needs_redraw);
}

#[test]
fn test_equals_with_no_operand_uses_default() {
    let state = run("5+=");
    assert_display(&state, "5+0", "5");
}

#[test]
fn test_division_by_zero_displays_default() {
    let state = run("5/0=");
    assert_display(&state, "5/0", "0");
    assert_eq!(state.last_result(), Some(0.0));

    let state = run("0/0=");
    assert_display(&state, "0/0", "0");
}

#[test]
fn test_negative_division_by_zero_displays_default() {
    let state = run("3-5=/0=");
    assert_display(&state, "-2/0", "0");
}

#[test]
fn test_result_rounding() {
    let state = run("2/3=");
    assert_display(&state, "2/3", "0.6667");
    assert_eq!(state.last_result(), Some(0.6667));

    let state = run("4/2=");
    assert_display(&state, "4/2", "2");

    // Exact ties round up in magnitude
    let state = run("1/32=");
    assert_display(&state, "1/32", "0.0313");
}

#[test]
fn test_negative_results() {
    let mut state = run("3-5=");
    assert_display(&state, "3-5", "-2");

    feed(&mut state, "-1=");
    assert_display(&state, "-2-1", "-3");
}

#[test]
fn test_digit_after_result_starts_new_number() {
    let state = run("5+3=7");
    assert_display(&state, "5+3", "7");
    assert!(state.last_result().is_none());

    let state = run("2/3=1");
    assert_display(&state, "2/3", "1");
}

#[test]
fn test_decimal_after_result_starts_new_number() {
    let state = run("5+3=.5");
    assert_display(&state, "5+3", "0.5");
}

#[test]
fn test_delete_trims_and_falls_back() {
    let mut state = run("123");
    feed(&mut state, "<Backspace>");
    assert_display(&state, "", "12");

    feed(&mut state, "<Backspace><Backspace>");
    assert_display(&state, "", "0");

    feed(&mut state, "<Backspace>");
    assert_display(&state, "", "0");
}

#[test]
fn test_delete_on_result_resets() {
    let state = run("5+3=<Backspace>");
    assert_display(&state, "5+3", "0");
    assert!(state.last_result().is_none());
}

#[test]
fn test_delete_trailing_point() {
    let state = run("7.<Backspace>");
    assert_display(&state, "", "7");
}

#[test]
fn test_clear_resets_everything() {
    let mut state = run("5+3==*7");
    feed(&mut state, "<Escape>");

    assert_display(&state, "", "0");
    assert!(state.current_operator().is_none());
    assert!(state.last_operation().is_none());
    assert!(state.last_result().is_none());
    assert!(state.pending().is_none());

    // Equals after clear does nothing
    feed(&mut state, "=");
    assert_display(&state, "", "0");
}

#[test]
fn test_on_operator_id() {
    let mut state = create_test_state();
    state.handle_token(Token::Digit(Digit::new(9).unwrap()));
    state.on_operator_id("divide").unwrap();
    assert_display(&state, "9/", "0");
}

#[test]
fn test_unknown_operator_id_fails_fast() {
    let mut state = run("9");
    state.needs_redraw = false;

    let err = state.on_operator_id("modulo").unwrap_err();
    assert_eq!(err.id, "modulo");
    assert_display(&state, "", "9");
    assert!(state.current_operator().is_none());
    assert!(!state.needs_redraw);
}

#[test]
fn test_custom_symbols() {
    let symbols = SymbolsConfig {
        multiply: "×".to_string(),
        divide: "÷".to_string(),
        ..SymbolsConfig::default()
    };
    let keymap = Keymap::from_config(&KeybindingsConfig::default()).unwrap();
    let mut state = CalculatorState::new(symbols, keymap);

    feed(&mut state, "6x");
    assert_display(&state, "6×", "0");

    feed(&mut state, "÷");
    assert_display(&state, "6÷", "0");

    feed(&mut state, "4=");
    assert_display(&state, "6÷4", "1.5");
}

#[test]
fn test_numpad_keys() {
    let state = run("<Numpad7><NumpadMultiply><Numpad6><NumpadEnter>");
    assert_display(&state, "7*6", "42");
}

#[test]
fn test_quit_key_sets_exit() {
    let mut state = create_test_state();
    state.on_key_press(KeyPress::with_modifiers(Key::Char('q'), Modifiers::ctrl()));
    assert!(state.should_exit);
    assert_display(&state, "", "0");
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut state = run("5");
    state.needs_redraw = false;
    feed(&mut state, "%<Tab>");
    assert_display(&state, "", "5");
    assert!(!state.needs_redraw);
}

#[test]
fn test_redraw_flag() {
    let mut state = create_test_state();
    assert!(state.take_redraw());
    assert!(!state.take_redraw());

    feed(&mut state, "1");
    assert!(state.take_redraw());

    // Second decimal point changes nothing
    feed(&mut state, ".");
    assert!(state.take_redraw());
    feed(&mut state, ".");
    assert!(!state.take_redraw());
}

#[test]
fn test_registers_snapshot() {
    let state = run("5+3+");
    let registers = state.registers();
    assert_eq!(registers.expression, "5+3");
    assert_eq!(registers.operand, "8");
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        (0u8..10).prop_map(|d| Token::Digit(Digit::new(d).unwrap())),
        proptest::sample::select(Operator::ALL.to_vec()).prop_map(Token::Operator),
        Just(Token::DecimalPoint),
        Just(Token::Equals),
        Just(Token::Delete),
    ]
}

proptest! {
    #[test]
    fn prop_digits_accumulate_without_leading_zeros(digits in proptest::collection::vec(0u8..10, 1..20)) {
        let mut state = create_test_state();
        for d in &digits {
            state.on_digit(Digit::new(*d).unwrap());
        }

        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(state.operand().as_str(), expected);
        prop_assert_eq!(state.expression(), "");
    }

    #[test]
    fn prop_clear_always_resets(tokens in proptest::collection::vec(token_strategy(), 0..40)) {
        let mut state = create_test_state();
        for token in tokens {
            state.handle_token(token);
        }
        state.on_clear();

        prop_assert_eq!(state.operand().as_str(), "0");
        prop_assert_eq!(state.expression(), "");
        prop_assert!(state.current_operator().is_none());
        prop_assert!(state.last_operation().is_none());
    }

    #[test]
    fn prop_operand_always_parses(tokens in proptest::collection::vec(token_strategy(), 0..40)) {
        let mut state = create_test_state();
        for token in tokens {
            state.handle_token(token);
            prop_assert!(!state.operand().as_str().is_empty());
            prop_assert!(state.operand().value().is_finite());
        }
    }
}

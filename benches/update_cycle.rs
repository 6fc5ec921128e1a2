use std::hint::black_box;

use calcui::{
    core::msg::calculator::CalculatorMsg,
    domain::numeral::{format_display, format_number, NumberFormat},
    update, AppState, Msg, RawMsg, Runtime,
};
use criterion::{criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const INPUT: &str = "1234.5*678-9/3+0.25=";

fn pure_update(input: &str) -> AppState {
    input
        .chars()
        .filter_map(CalculatorMsg::from_char)
        .fold(AppState::new(), |state, msg| update(Msg::Calculator(msg), state).0)
}

fn runtime_cycle(input: &str) -> String {
    let mut runtime = Runtime::new_with_executor(AppState::new());
    for c in input.chars() {
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )));
    }
    let _ = runtime.run_update_cycle();
    runtime.state().formatted_display()
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("pure-update", |b| b.iter(|| pure_update(black_box(INPUT))));
    c.bench_function("runtime-cycle", |b| {
        b.iter(|| runtime_cycle(black_box(INPUT)))
    });

    let format = NumberFormat::default();
    c.bench_function("format-number", |b| {
        b.iter(|| format_number(black_box(0.1 + 0.2)))
    });
    c.bench_function("format-display", |b| {
        b.iter(|| format_display(black_box("-1234567.891"), &format))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

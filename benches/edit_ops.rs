use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use goodtranslator::domain::{
    editing::{apply, word_start, EditOp},
    text_buffer::TextBuffer,
};

const TEXT: &str = "Le petit prince s'en fut revoir les roses. Vous n'êtes pas du tout semblables à ma rose, vous n'êtes rien encore, leur dit-il. Personne ne vous a apprivoisées et vous n'avez apprivoisé personne.";

fn long_buffer() -> TextBuffer {
    let text = vec![TEXT; 200].join("\n");
    let mut buffer = TextBuffer::from_text(&text);
    let end = buffer.end_position();
    buffer.set_cursor(end);
    buffer
}

fn criterion_benchmark(c: &mut Criterion) {
    let buffer = long_buffer();

    c.bench_function("word_start", |b| {
        b.iter(|| word_start(black_box(TEXT), black_box(TEXT.chars().count())))
    });

    c.bench_function("delete_word_backward", |b| {
        b.iter(|| apply(black_box(buffer.clone()), &EditOp::DeleteWordBackward))
    });

    c.bench_function("delete_to_line_start", |b| {
        b.iter(|| apply(black_box(buffer.clone()), &EditOp::DeleteToLineStart))
    });

    c.bench_function("select_all", |b| {
        b.iter(|| apply(black_box(buffer.clone()), &EditOp::SelectAll))
    });

    c.bench_function("insert_then_undo", |b| {
        b.iter(|| {
            let edited = apply(buffer.clone(), &EditOp::InsertText("!".to_string()));
            apply(black_box(edited), &EditOp::Undo)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

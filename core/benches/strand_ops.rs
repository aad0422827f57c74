use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use strands_core::{Board, Pos, Step, Strand};

/// Boustrophedon path covering an entire `rows` x `cols` grid.
fn snake_strand(rows: i32, cols: i32) -> Strand {
    let mut steps = Vec::new();
    for row in 0..rows {
        let run = if row % 2 == 0 { Step::East } else { Step::West };
        steps.extend(std::iter::repeat_n(run, (cols - 1) as usize));
        if row + 1 < rows {
            steps.push(Step::South);
        }
    }
    Strand::new(Pos::new(0, 0), steps)
}

fn letter_board(rows: usize, cols: usize) -> Board {
    let rows = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| (b'a' + ((row * cols + col) % 26) as u8) as char)
                .collect()
        })
        .collect();
    Board::from_rows(rows).unwrap()
}

fn bench_evaluate_strand(c: &mut Criterion) {
    let board = letter_board(16, 16);
    let strand = snake_strand(16, 16);
    c.bench_function("evaluate_strand/16x16", |b| {
        b.iter(|| board.evaluate_strand(black_box(&strand)).unwrap())
    });
}

fn bench_fold_detection(c: &mut Criterion) {
    let strand = snake_strand(16, 16);
    c.bench_function("is_folded/16x16", |b| {
        b.iter(|| black_box(&strand).is_folded())
    });
    c.bench_function("is_cyclic/16x16", |b| {
        b.iter(|| black_box(&strand).is_cyclic())
    });
}

criterion_group!(benches, bench_evaluate_strand, bench_fold_detection);
criterion_main!(benches);

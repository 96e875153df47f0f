use criterion::{criterion_group, criterion_main, Criterion};

use rapriori::{BasketMatrix, RuleMiner};

/// Deterministic synthetic basket matrix, roughly one third density.
fn synthetic_matrix(n_baskets: usize, n_items: usize) -> BasketMatrix {
    let columns: Vec<String> = (0..n_items).map(|i| format!("item{i}")).collect();
    let mut cells = Vec::with_capacity(n_baskets * n_items);
    let mut state = 0x2545f4914f6cdd1du64;
    for _ in 0..n_baskets * n_items {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        cells.push((state % 3 == 0) as u8);
    }
    BasketMatrix::from_dense(columns, &cells).unwrap()
}

fn bench_mining(c: &mut Criterion) {
    let matrix = synthetic_matrix(512, 16);
    let miner = RuleMiner::new(48, 0.6).unwrap();

    c.bench_function("frequent_itemsets", |b| b.iter(|| miner.frequent_itemsets(&matrix)));
    c.bench_function("mine_rules", |b| b.iter(|| miner.mine(&matrix).unwrap()));
}

criterion_group!(benches, bench_mining);
criterion_main!(benches);

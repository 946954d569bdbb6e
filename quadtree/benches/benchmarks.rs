use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::QuadTree;
use quadtree::shapes::Rectangle;
use rand::prelude::*;

const WORLD: Rectangle = Rectangle {
    x: 0,
    y: 0,
    width: 4096,
    height: 4096,
};

fn random_rects(count: usize) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let width = rng.gen_range(1..32);
            let height = rng.gen_range(1..32);
            WORLD.random_inside(width, height, &mut rng)
        })
        .collect()
}

fn build_tree(rects: &[Rectangle]) -> QuadTree<Rectangle> {
    let mut quadtree = QuadTree::new(WORLD).unwrap();
    quadtree.insert_batch(rects.iter().copied()).unwrap();
    quadtree
}

fn insert_benchmark(c: &mut Criterion) {
    let rects = random_rects(1000);

    c.bench_function("quadtree_insert_1000", |b| {
        b.iter(|| build_tree(black_box(&rects)))
    });
}

fn containing_quad_benchmark(c: &mut Criterion) {
    let quadtree = build_tree(&random_rects(10_000));
    let queries = random_rects(256);

    c.bench_function("quadtree_containing_quad", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(quadtree.get_containing_quad(black_box(query)));
            }
        })
    });
}

fn all_rectangles_benchmark(c: &mut Criterion) {
    let quadtree = build_tree(&random_rects(10_000));

    c.bench_function("quadtree_all_rectangles", |b| {
        b.iter(|| {
            let mut bounding_boxes = Vec::new();
            quadtree.all_node_bounding_boxes(&mut bounding_boxes);
            black_box(bounding_boxes)
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    containing_quad_benchmark,
    all_rectangles_benchmark
);
criterion_main!(quadtree_benchmarks);

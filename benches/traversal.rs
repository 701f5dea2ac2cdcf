use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphwalk::{algorithm::*, graph::*};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("1000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, list_backed, matrix_backed);
criterion_main!(benches);

fn list_backed(c: &mut Criterion) {
    cases(c, "list_backed", Storage::AdjacencyList);
}

fn matrix_backed(c: &mut Criterion) {
    cases(c, "matrix_backed", Storage::AdjacencyMatrix);
}

fn cases(c: &mut Criterion, prefix: &str, storage: Storage) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);

    let g = random_graph(vertex_size, edge_size, GraphOptions::default().storage(storage));
    let dg = random_graph(
        vertex_size,
        edge_size,
        GraphOptions::default().directed(true).storage(storage),
    );
    c.bench_function(&(prefix.to_string() + "/bfs_all"), |b| {
        b.iter(|| black_box(g.bfs_all()))
    });
    c.bench_function(&(prefix.to_string() + "/dfs_all iterative"), |b| {
        b.iter(|| black_box(g.dfs_all(DfsOrder::Iterative)))
    });
    c.bench_function(&(prefix.to_string() + "/dfs_all recursive"), |b| {
        b.iter(|| black_box(g.dfs_all(DfsOrder::Recursive)))
    });
    c.bench_function(&(prefix.to_string() + "/find_all_cycles"), |b| {
        b.iter(|| black_box(g.find_all_cycles()))
    });
    c.bench_function(&(prefix.to_string() + "/has_cycle_coloring"), |b| {
        b.iter(|| black_box(dg.has_cycle_coloring()))
    });
    c.bench_function(&(prefix.to_string() + "/transitive_closure"), |b| {
        b.iter(|| black_box(dg.transitive_closure()))
    });
}

fn random_graph(vertex_size: usize, edge_size: usize, options: GraphOptions) -> Graph {
    let mut g = Graph::new(vertex_size, options);
    for _ in 0..edge_size {
        let v0 = rand::thread_rng().gen::<usize>() % vertex_size;
        let v1 = rand::thread_rng().gen::<usize>() % vertex_size;
        g.add_edge(VertexId::new(v0), VertexId::new(v1)).unwrap();
    }
    g
}

use std::fs;

use divan::{AllocProfiler, Bencher};
use freegames::{config::Config, discover_games, launcher::Launcher};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn games_dir(count: usize) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create games directory");
    for i in 0..count {
        fs::write(dir.path().join(format!("game_{i:04}.py")), "").expect("failed to write game");
    }
    fs::write(dir.path().join("__init__.py"), "").expect("failed to write init");
    fs::write(dir.path().join("utils.py"), "").expect("failed to write utils");
    dir
}

// Rough idea of how discovery scales with the size of the games directory
#[divan::bench(args = [10, 100, 1000], sample_size = 100)]
fn bench_discover_games(bencher: Bencher, count: usize) {
    let dir = games_dir(count);
    bencher.bench(|| discover_games(dir.path()));
}

#[divan::bench(sample_size = 100)]
fn bench_list(bencher: Bencher) {
    let dir = games_dir(20);
    let launcher = Launcher::new(Config::new(dir.path(), "python3")).expect("failed to discover");
    bencher.bench(|| {
        let mut out = Vec::<u8>::new();
        launcher.list(&mut out).map(|_| out)
    });
}

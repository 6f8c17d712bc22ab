use std::time::Instant;
use std::hint;
use allocator_api2::alloc::Allocator;
use chainlist::List;

const COUNT: usize = 1_000_000;

fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 1_000_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = hint::black_box(s);
}

fn timeit<F: FnOnce()>(f: F) -> f64 {
  let start = Instant::now();
  f();
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<A: Allocator>(name: &str, list: &mut List<A>) {
  let count = hint::black_box(COUNT);

  let elapsed = timeit(|| {
    for i in 0 .. count {
      let _ = list.insert_front((i % 4) as i32);
    }
  });
  print!("{:25} {:.3} ns\n", format!("{name} insert_front"), elapsed / (count as f64));

  let elapsed = timeit(|| list.reverse());
  print!("{:25} {:.3} ns\n", format!("{name} reverse"), elapsed / (count as f64));

  let elapsed = timeit(|| { let _ = hint::black_box(list.remove_all(0)); });
  print!("{:25} {:.3} ns\n", format!("{name} remove_all"), elapsed / (count as f64));

  let _ = hint::black_box(list.size());
}

fn main() {
  warmup();

  let bump = bumpalo::Bump::new();

  run_bench("global", &mut List::new());
  run_bench("global (reserved)", &mut List::with_capacity(COUNT));
  run_bench("bumpalo", &mut List::new_in(&bump));
}

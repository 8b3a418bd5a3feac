//! Benchmark: element rendering

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tagsmith_core::{Arg, EscapeMode, RenderOptions, Renderer, attrs, render};

fn benchmark_single_element(c: &mut Criterion) {
	c.bench_function("render_div_with_attributes", |b| {
		b.iter(|| {
			render(
				black_box("div"),
				(attrs! { "id" => "main", "class" => "container" }, "Hello"),
				false,
			)
		})
	});

	let escaping = Renderer::new(RenderOptions::new().escape(EscapeMode::Html));
	c.bench_function("render_div_escaped", |b| {
		b.iter(|| {
			escaping.render(
				black_box("div"),
				(attrs! { "title" => "a & b" }, "<script>alert('x')</script>"),
				false,
			)
		})
	});
}

fn benchmark_list(c: &mut Criterion) {
	let mut group = c.benchmark_group("render_list");

	for size in [10usize, 100, 1000] {
		group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
			b.iter(|| {
				let items: Vec<_> = (0..size).map(|index| render("li", (index,), false)).collect();
				render("ul", black_box(items), false)
			})
		});
	}

	group.finish();
}

fn benchmark_deep_nesting(c: &mut Criterion) {
	c.bench_function("render_nested_args_depth_100", |b| {
		b.iter(|| {
			let mut nested = Arg::text("leaf");
			for _ in 0..100 {
				nested = Arg::Nested(vec![Arg::text("x"), nested]);
			}
			render("p", black_box(nested), false)
		})
	});
}

criterion_group!(
	benches,
	benchmark_single_element,
	benchmark_list,
	benchmark_deep_nesting
);
criterion_main!(benches);

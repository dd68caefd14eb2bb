use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faxc_par::parsers::document;
use faxc_par::ParseState;

const SAMPLE: &str = r#"
using std;
using std.io;
module sample.hello;

# a full-file parse sample
alias Num = int32;
var mystr: string = 0;
const limit: int32 = 0;
def entry(args: string): void {
    console.print("Hello, World!");
}
"#;

fn parse_full_file(source: &str) {
    let mut state = ParseState::new(source, "bench.fax").expect("sample source is lexically valid");
    document::parse(&mut state).expect("sample source is a valid document skeleton");
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse full file to Document", |b| {
        b.iter(|| parse_full_file(black_box(SAMPLE)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);

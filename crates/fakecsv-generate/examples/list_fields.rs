use fakecsv_generate::FieldKind;

fn main() {
    for field in FieldKind::ALL {
        let source = if field.is_identity() { "row identity" } else { "independent" };
        println!("{field}\t{source}");
    }
}

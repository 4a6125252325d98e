use kmodes::{k_modes_array, k_modes_stream, IterProducer, KModes, Strategy};

fn main() {
    // Array mode: the whole input is available up front
    let arr = [3, 2, 9, 4, 5, 1, 2, 3, 5, 7, 9, 8, 9, 0, 9, 8, 7, 9, 5, 6, 2, 3, 4, 6, 5];
    println!("array, k=3, linear: {:?}", k_modes_array(&arr, 3, Strategy::Linear));
    println!("array, k=3, heap:   {:?}", k_modes_array(&arr, 3, Strategy::Heap));

    // Stream mode: elements are pulled until the producer runs dry.
    // Zeros are ordinary values here.
    let mut stream = IterProducer::new([9, 5, 0, 5, 9, 0, 9, 0, 0]);
    println!("stream, k=2: {:?}", k_modes_stream(&mut stream, 2, Strategy::Heap));

    // A session exposes counts while data is still arriving
    let mut modes: KModes<&str> = KModes::new(2, Strategy::default());
    for word in "a rose is a rose is a rose".split_whitespace() {
        modes.add(word);
    }

    println!("\nTop words and their counts:");
    for node in modes.list() {
        println!("{}: {}", node.item, node.count);
    }

    let item = "is";
    println!("\nCount for '{}': {}", item, modes.count(&item));
    println!("Is '{}' in top-k? {}", item, if modes.query(&item) { "yes" } else { "no" });
}

fn greet_and_classify_one() {
    println!("Hello, World!");
    for i in 0..5 {
        println!("This is line {i}");
        if i % 2 == 0 {
            println!("Even number");
        } else {
            println!("Odd number");
        }
    }
}

fn greet_and_classify_two() {
    println!("Hello, World!");
    for i in 0..5 {
        println!("This is line {i}");
        if i % 2 == 0 {
            println!("Even number");
        } else {
            println!("Odd number");
        }
    }
}

fn main() {
    greet_and_classify_one();
    greet_and_classify_two();
}

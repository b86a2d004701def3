use forward_list::collections::linked::ForwardList;

#[derive(Debug, Clone)]
struct Noisy(u8);

impl Drop for Noisy {
    fn drop(&mut self) {
        println!("Dropped Noisy({})", self.0);
    }
}

fn main() {
    println!("\n[ForwardList]\n");

    let mut list = ForwardList::<u8>::new();
    println!("{list:?}");

    for i in 0..8 {
        list.push_front(i);
        println!("{list}");
    }

    list.reverse();
    println!("{list}");

    {
        let mut cursor = list.begin_mut();
        cursor.move_next().move_next();
        cursor.insert_after(100);
        println!("erased after 100, now next: {:?}", cursor.erase_after().read());
    }
    println!("{list}");

    let copy = list.clone();
    list.pop_front();
    println!("{copy} vs {list}: copy < list is {}", copy < list);

    println!("\n[Drop order]\n");

    let noisy = ForwardList::from([Noisy(1), Noisy(2), Noisy(3)]);
    println!("{noisy:?}");
    drop(noisy);
}

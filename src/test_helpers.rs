// A `Droppable` type local to the invoking test, with a live-instance
// counter. Instances are numbered from 1 in creation order.
macro_rules! droppable {
    () => {
        #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
        struct Droppable(i32);

        impl Droppable {
            fn new() -> Self {
                let id = COUNT.fetch_add(1, core::sync::atomic::Ordering::Relaxed) + 1;
                Droppable(id)
            }

            fn count() -> i32 {
                COUNT.load(core::sync::atomic::Ordering::Relaxed)
            }
        }

        impl Drop for Droppable {
            fn drop(&mut self) {
                COUNT.fetch_sub(1, core::sync::atomic::Ordering::Relaxed);
            }
        }

        static COUNT: core::sync::atomic::AtomicI32 = core::sync::atomic::AtomicI32::new(0);
    };
}

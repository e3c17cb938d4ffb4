// src/build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/attendance.ico");    // 32 + 64 px
        res.compile().unwrap();
    }
}

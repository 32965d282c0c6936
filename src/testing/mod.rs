
#[allow(unused_imports)]
pub use ports::FakeInstaller;
#[allow(unused_imports)]
pub use ports::MemoryFilesystem;
#[allow(unused_imports)]
pub use ports::ScriptedPrompt;

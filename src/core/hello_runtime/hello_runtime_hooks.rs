// src/core/hello_runtime/hello_runtime_hooks.rs

/// Parameterloser Hook, der höchstens einmal vor der Hauptschleife läuft.
pub trait StartupHook {
    fn call(&mut self);

    fn name(&self) -> &str {
        "startup_hook"
    }
}

/// Standard-Hook des Binaries. Die eigentliche Nutzerfunktion ist extern; hier wird nur protokolliert.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsrFun;

impl StartupHook for UsrFun {
    fn call(&mut self) {
        log::info!("usr_fun: user function called");
    }

    fn name(&self) -> &str {
        "usr_fun"
    }
}

/// Adapter, um eine Closure als Hook zu verwenden.
pub struct FnHook<F: FnMut()> {
    name: String,
    f: F,
}

impl<F: FnMut()> FnHook<F> {
    pub fn new(name: &str, f: F) -> Self {
        FnHook { name: name.to_string(), f }
    }
}

impl<F: FnMut()> StartupHook for FnHook<F> {
    fn call(&mut self) {
        (self.f)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_hook_calls_closure() {
        let mut count = 0;
        {
            let mut hook = FnHook::new("counter", || count += 1);
            assert_eq!(hook.name(), "counter");
            hook.call();
            hook.call();
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_usr_fun_name() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut hook = UsrFun;
        hook.call();
        assert_eq!(hook.name(), "usr_fun");
    }
}

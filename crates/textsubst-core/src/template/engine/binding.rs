//! Variable bindings and context-slot selection
//!
//! A substituter is expanded against one fixed context type `C`, usually a
//! tuple of context structs. A field binding names an owner type and an
//! accessor; [`Select`] finds the single slot of `C` holding that owner.
//! The lookup is resolved by the compiler when the binding is defined:
//!
//! - owner type matches exactly one slot: the slot is inferred,
//! - owner type matches no slot: the `define` call does not compile,
//! - owner type matches several slots: the `define` call does not compile
//!   until the slot is named with [`Binding::field_in`].

use std::fmt::Display;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use super::output::Output;

/// Behaviour bound to a variable name
pub(crate) type Evaluator<C> = Box<dyn Fn(&mut Output<'_>, &C) -> io::Result<()> + Send + Sync>;

/// Access to the context slot holding a `T`
///
/// `S` identifies the slot: [`Slot0`]..[`Slot5`] for tuple positions, or
/// [`Whole`] when the context itself is the owner.
pub trait Select<T: ?Sized, S> {
    fn select(&self) -> &T;
}

/// The context as a whole
#[derive(Debug, Clone, Copy, Default)]
pub struct Whole;

impl<T> Select<T, Whole> for T {
    fn select(&self) -> &T {
        self
    }
}

macro_rules! slots {
    ($($slot:ident),+) => {
        $(
            #[doc = concat!("Tuple position marker `", stringify!($slot), "`")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $slot;
        )+
    };
}

slots!(Slot0, Slot1, Slot2, Slot3, Slot4, Slot5);

macro_rules! select_impl {
    (($($T:ident),+) $slot:ident $idx:tt $Target:ident) => {
        impl<$($T),+> Select<$Target, $slot> for ($($T,)+) {
            fn select(&self) -> &$Target {
                &self.$idx
            }
        }
    };
}

macro_rules! tuple_select {
    ($tuple:tt; $(($slot:ident, $idx:tt, $Target:ident)),+ $(,)?) => {
        $( select_impl!($tuple $slot $idx $Target); )+
    };
}

tuple_select!((A); (Slot0, 0, A));
tuple_select!((A, B); (Slot0, 0, A), (Slot1, 1, B));
tuple_select!((A, B, C); (Slot0, 0, A), (Slot1, 1, B), (Slot2, 2, C));
tuple_select!(
    (A, B, C, D);
    (Slot0, 0, A), (Slot1, 1, B), (Slot2, 2, C), (Slot3, 3, D)
);
tuple_select!(
    (A, B, C, D, E);
    (Slot0, 0, A), (Slot1, 1, B), (Slot2, 2, C), (Slot3, 3, D), (Slot4, 4, E)
);
tuple_select!(
    (A, B, C, D, E, F);
    (Slot0, 0, A), (Slot1, 1, B), (Slot2, 2, C), (Slot3, 3, D), (Slot4, 4, E), (Slot5, 5, F)
);

/// How a variable produces its text
///
/// Passed to [`Substituter::define`](super::Substituter::define).
pub struct Binding<C> {
    pub(crate) eval: Evaluator<C>,
}

impl<C> Binding<C> {
    /// Always write `value`, ignoring the context
    ///
    /// The value is moved into the binding, so every expansion prints it as
    /// it was at definition time. Use [`shared`](Self::shared) for a value
    /// the host keeps updating.
    pub fn value<T>(value: T) -> Self
    where
        T: Display + Send + Sync + 'static,
    {
        Self::custom(move |out, _ctx| out.put(&value))
    }

    /// Write the current content of `handle`, ignoring the context
    ///
    /// The lock is read on every expansion, so updates made by the host
    /// after the binding was defined show up in the output.
    ///
    /// ```
    /// use std::sync::{Arc, RwLock};
    /// use textsubst_core::{Binding, Substituter};
    ///
    /// let peers = Arc::new(RwLock::new(3));
    /// let mut subst: Substituter<()> = Substituter::default();
    /// subst.define("n", Binding::shared(Arc::clone(&peers))).unwrap();
    ///
    /// let template = subst.parse("@n peers").unwrap();
    /// assert_eq!(template.expand_to_string(&()).unwrap(), "3 peers");
    /// *peers.write().unwrap() = 5;
    /// assert_eq!(template.expand_to_string(&()).unwrap(), "5 peers");
    /// ```
    pub fn shared<T>(handle: Arc<RwLock<T>>) -> Self
    where
        T: Display + Send + Sync + 'static,
    {
        Self::custom(move |out, _ctx| {
            // Read through poisoning.
            let value = handle.read().unwrap_or_else(PoisonError::into_inner);
            out.put(&*value)
        })
    }

    /// Write the field returned by `accessor` from the context slot whose
    /// type is `O`
    ///
    /// ```
    /// use textsubst_core::{Binding, Substituter};
    ///
    /// struct Clock { tick: u64 }
    /// struct Peer { name: String }
    ///
    /// let mut subst: Substituter<(Clock, Peer)> = Substituter::default();
    /// subst.define("t", Binding::field(|c: &Clock| &c.tick)).unwrap();
    /// subst.define("peer", Binding::field(|p: &Peer| &p.name)).unwrap();
    ///
    /// let template = subst.parse("[@t] @{peer}").unwrap();
    /// let ctx = (Clock { tick: 7 }, Peer { name: "alpha".into() });
    /// assert_eq!(template.expand_to_string(&ctx).unwrap(), "[7] alpha");
    /// ```
    ///
    /// An owner type that is not part of the context is rejected:
    ///
    /// ```compile_fail
    /// use textsubst_core::{Binding, Substituter};
    ///
    /// struct Clock { tick: u64 }
    /// struct Unrelated { n: u64 }
    ///
    /// let mut subst: Substituter<(Clock,)> = Substituter::default();
    /// subst.define("n", Binding::field(|u: &Unrelated| &u.n)).unwrap();
    /// ```
    ///
    /// So is an owner type that appears in more than one slot:
    ///
    /// ```compile_fail
    /// use textsubst_core::{Binding, Substituter};
    ///
    /// struct Clock { tick: u64 }
    ///
    /// let mut subst: Substituter<(Clock, Clock)> = Substituter::default();
    /// subst.define("t", Binding::field(|c: &Clock| &c.tick)).unwrap();
    /// ```
    pub fn field<O, S, F, T>(accessor: F) -> Self
    where
        C: Select<O, S>,
        O: ?Sized,
        F: Fn(&O) -> &T + Send + Sync + 'static,
        T: Display + ?Sized,
    {
        Self::custom(move |out, ctx| out.put(accessor(<C as Select<O, S>>::select(ctx))))
    }

    /// Like [`field`](Self::field), with the slot named explicitly
    ///
    /// ```
    /// use textsubst_core::{Binding, Slot0, Slot1, Substituter};
    ///
    /// struct Endpoint { port: u16 }
    ///
    /// let mut subst: Substituter<(Endpoint, Endpoint)> = Substituter::default();
    /// subst.define("l", Binding::field_in(Slot0, |e: &Endpoint| &e.port)).unwrap();
    /// subst.define("r", Binding::field_in(Slot1, |e: &Endpoint| &e.port)).unwrap();
    ///
    /// let template = subst.parse("@l -> @r").unwrap();
    /// let ctx = (Endpoint { port: 80 }, Endpoint { port: 8080 });
    /// assert_eq!(template.expand_to_string(&ctx).unwrap(), "80 -> 8080");
    /// ```
    pub fn field_in<O, S, F, T>(_slot: S, accessor: F) -> Self
    where
        C: Select<O, S>,
        O: ?Sized,
        F: Fn(&O) -> &T + Send + Sync + 'static,
        T: Display + ?Sized,
    {
        Self::field::<O, S, F, T>(accessor)
    }

    /// Arbitrary behaviour with access to the whole context and the sink
    ///
    /// Changes the evaluator makes to the sink's [`Format`](super::Format)
    /// are undone once it returns.
    pub fn custom<F>(eval: F) -> Self
    where
        F: Fn(&mut Output<'_>, &C) -> io::Result<()> + Send + Sync + 'static,
    {
        Self {
            eval: Box::new(eval),
        }
    }
}

impl<C> std::fmt::Debug for Binding<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

/// A layer that produces a layered value (middleware(inner)).
///
/// Mirrors the `tower-layer` trait, without the `tower` dependency.
pub trait Layer<S> {
    /// The value produced by the layer.
    type Service;

    /// Wrap the given inner value, returning a new one.
    fn layer(&self, inner: S) -> Self::Service;
}

impl<T, S> Layer<S> for &T
where
    T: ?Sized + Layer<S>,
{
    type Service = T::Service;

    fn layer(&self, inner: S) -> Self::Service {
        (**self).layer(inner)
    }
}

impl<S> Layer<S> for () {
    type Service = S;

    fn layer(&self, inner: S) -> Self::Service {
        inner
    }
}

impl<S, L1, L2> Layer<S> for (L1, L2)
where
    L1: Layer<L2::Service>,
    L2: Layer<S>,
{
    type Service = L1::Service;

    fn layer(&self, inner: S) -> Self::Service {
        let (l1, l2) = self;
        l1.layer(l2.layer(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wrap(&'static str);

    impl Layer<String> for Wrap {
        type Service = String;

        fn layer(&self, inner: String) -> Self::Service {
            format!("{}({inner})", self.0)
        }
    }

    #[test]
    fn unit_layer_is_identity() {
        assert_eq!(().layer(7), 7);
    }

    #[test]
    fn tuple_layers_wrap_outer_to_inner() {
        let layers = (Wrap("outer"), Wrap("inner"));
        assert_eq!(layers.layer("svc".to_owned()), "outer(inner(svc))");
    }
}

fn main()
{
    filmstrip_bin::main()
}
